use crate::auth::{GuardDecision, RouteGuard};
use crate::cli::actions::{report_field_errors, session_store};
use crate::forms::{LoginScreen, SubmitOutcome};
use crate::routes::{History, Route};
use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub api_url: Option<String>,
    pub email: String,
    pub password: SecretString,
    pub logout: bool,
}

/// Signs in through the login screen, then opens the home route behind the
/// guard using the same cookie jar.
///
/// # Errors
/// Returns an error if validation blocks the submission, the server rejects
/// it, or the session cannot be verified afterwards.
pub async fn execute(args: Args) -> Result<()> {
    let store = session_store(args.api_url.as_deref())?;
    let history = History::new();

    let mut screen = LoginScreen::new();
    screen.set_email(args.email);
    screen.set_password(args.password.expose_secret());

    match screen.submit(&store, &history).await {
        SubmitOutcome::Succeeded => info!("signed in as {}", screen.email()),
        SubmitOutcome::Blocked | SubmitOutcome::Failed => {
            report_field_errors(screen.errors());
            bail!("login failed");
        }
    }

    let decision = RouteGuard::new(&store).mount(&history).await;
    println!("{}: {decision}", Route::Home);
    if decision != GuardDecision::Render {
        bail!("session was not accepted after login");
    }

    if args.logout {
        store.logout().await.context("logout failed")?;
        println!("logged out");
    }

    Ok(())
}
