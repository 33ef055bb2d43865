//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("launch")
        .stdout_has("check")
        .stdout_has("deliver")
        .stdout_has("status");
}

#[test]
fn prefs_help_shows_subcommands() {
    cli()
        .args(&["prefs", "--help"])
        .passes()
        .stdout_has("opt-in")
        .stdout_has("opt-out")
        .stdout_has("reset-first-use");
}

#[test]
fn permission_help_shows_subcommands() {
    cli()
        .args(&["permission", "--help"])
        .passes()
        .stdout_has("show")
        .stdout_has("request")
        .stdout_has("set");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
