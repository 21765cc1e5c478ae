//! Shared scenario helpers.

use pagina::mock::MockPage;
use pagina::{CredentialStore, LoginPage, PaginaResult, ROLE_STANDARD};

/// Initialize test tracing output once (respects `RUST_LOG`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fresh login page on its canonical location.
pub async fn open_login_page() -> PaginaResult<LoginPage<MockPage>> {
    init_tracing();
    let mut login = LoginPage::new(MockPage::new());
    login.navigate().await?;
    Ok(login)
}

/// Log in as the standard user and return the page object.
pub async fn login_as_standard() -> PaginaResult<LoginPage<MockPage>> {
    let users = CredentialStore::saucedemo();
    let mut login = open_login_page().await?;
    login.login(users.get(ROLE_STANDARD)?).await?;
    Ok(login)
}
