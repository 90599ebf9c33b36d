use crate::api::Role;
use crate::cli::actions::{report_field_errors, session_store};
use crate::forms::{RegisterScreen, SubmitOutcome};
use crate::routes::History;
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct Args {
    pub api_url: Option<String>,
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub role: Option<Role>,
    pub agree_terms: bool,
}

/// Fills the registration screen from the arguments and submits it.
///
/// # Errors
/// Returns an error if any field is invalid or the server refuses the account.
pub async fn execute(args: Args) -> Result<()> {
    let store = session_store(args.api_url.as_deref())?;
    let history = History::new();

    let mut screen = RegisterScreen::new();
    screen.set_full_name(args.full_name);
    screen.set_email(args.email);
    screen.set_password(args.password.expose_secret());
    screen.set_confirm_password(args.confirm_password.expose_secret());
    if let Some(role) = args.role {
        screen.select_role(role);
    }
    screen.set_agreed_to_terms(args.agree_terms);

    match screen.submit(&store, &history).await {
        SubmitOutcome::Succeeded => {
            let next = history.current().map_or_else(String::new, |route| route.to_string());
            println!("registered {}, continue at {next}", screen.form().email);
            Ok(())
        }
        SubmitOutcome::Blocked | SubmitOutcome::Failed => {
            report_field_errors(screen.errors());
            bail!("registration failed");
        }
    }
}
