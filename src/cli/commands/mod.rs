pub mod logging;

use crate::api::Role;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    builder::PossibleValuesParser,
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";

fn login_command() -> Command {
    Command::new("login")
        .about("Sign in and check the session against the home route")
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Account email")
                .env("REFLASH_EMAIL"),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .help("Account password")
                .env("REFLASH_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new("logout")
                .long("logout")
                .help("Log out again once the session has been verified")
                .action(ArgAction::SetTrue),
        )
}

fn register_command() -> Command {
    Command::new("register")
        .about("Create a new account")
        .arg(
            Arg::new("full-name")
                .short('n')
                .long("full-name")
                .help("Full name shown on the account"),
        )
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Account email")
                .env("REFLASH_EMAIL"),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .help("Password, at least 6 characters")
                .env("REFLASH_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new("confirm-password")
                .short('c')
                .long("confirm-password")
                .help("The same password again"),
        )
        .arg(
            Arg::new("role")
                .short('r')
                .long("role")
                .help("Account role")
                .value_parser(PossibleValuesParser::new([
                    Role::Teacher.as_str(),
                    Role::Student.as_str(),
                ])),
        )
        .arg(
            Arg::new("agree-terms")
                .long("agree-terms")
                .help("Agree to the terms and conditions")
                .action(ArgAction::SetTrue),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("reflash")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("API base URL, example: https://api.reflash.tld")
                .env("REFLASH_API_URL")
                .global(true),
        )
        .subcommand(login_command())
        .subcommand(register_command());

    logging::with_args(command)
}
