use crate::api::Role;
use crate::cli::actions::{login, register, Action};
use crate::cli::commands::ARG_API_URL;
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;

fn string_arg(matches: &clap::ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn secret_arg(matches: &clap::ArgMatches, id: &str) -> SecretString {
    SecretString::from(string_arg(matches, id))
}

/// # Errors
/// Returns an error if no known subcommand was given or an argument is inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_url = matches.get_one::<String>(ARG_API_URL).cloned();

    let (name, sub) = matches
        .subcommand()
        .context("missing subcommand, try --help")?;

    match name {
        "login" => Ok(Action::Login(login::Args {
            api_url,
            email: string_arg(sub, "email"),
            password: secret_arg(sub, "password"),
            logout: sub.get_flag("logout"),
        })),
        "register" => {
            let role = match sub.get_one::<String>("role") {
                Some(value) => {
                    Some(Role::parse(value).ok_or_else(|| anyhow!("unknown role: {value}"))?)
                }
                None => None,
            };

            Ok(Action::Register(register::Args {
                api_url,
                full_name: string_arg(sub, "full-name"),
                email: string_arg(sub, "email"),
                password: secret_arg(sub, "password"),
                confirm_password: secret_arg(sub, "confirm-password"),
                role,
                agree_terms: sub.get_flag("agree-terms"),
            }))
        }
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}
