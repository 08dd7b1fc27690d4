//! CLI utility helpers

use dga::{DgaConfig, Result};
use std::path::PathBuf;

/// Flags that take a value
const VALUE_FLAGS: [&str; 7] = ["--config", "--ch4", "--c2h6", "--c2h4", "--c2h2", "--co", "--co2"];

/// Command run when none is given
pub const DEFAULT_COMMAND: &str = "form";

/// Long flags that name a command rather than configure the default one
const COMMAND_FLAGS: [&str; 2] = ["--help", "--version"];

/// Split the arguments after the program name into the command and its
/// own arguments. A leading option such as `--json` belongs to the default
/// command.
pub fn resolve_command(args: &[String]) -> (&str, &[String]) {
    match args.first().map(String::as_str) {
        None => (DEFAULT_COMMAND, args),
        Some(first) if first.starts_with("--") && !COMMAND_FLAGS.contains(&first) => {
            (DEFAULT_COMMAND, args)
        }
        Some(first) => (first, &args[1..]),
    }
}

/// Commands that read `dga.yaml` and the output flags
pub fn uses_config(command: &str) -> bool {
    matches!(command, "form" | "eval" | "rules" | "config")
}

/// True if a bare flag such as `--json` is present
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Value following a flag such as `--config <path>`
pub fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Arguments that are neither flags nor flag values.
///
/// Only `--` prefixed words count as flags, so negative numbers such as
/// `-3` stay positional.
pub fn positionals(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg.starts_with("--") {
            skip_next = VALUE_FLAGS.contains(&arg.as_str());
            continue;
        }
        out.push(arg.as_str());
    }
    out
}

/// Parse --config argument to determine the config file path
pub fn parse_config_arg(args: &[String]) -> Option<PathBuf> {
    flag_value(args, "--config").map(PathBuf::from)
}

/// Effective configuration: file (explicit or `dga.yaml` in the working
/// directory) with `--json` / `--explain` applied on top
pub fn load_config(args: &[String]) -> Result<DgaConfig> {
    let cwd = std::env::current_dir()?;
    let explicit = parse_config_arg(args);
    let config = DgaConfig::resolve(explicit.as_deref(), &cwd)?;
    Ok(config.with_overrides(has_flag(args, "--json"), has_flag(args, "--explain")))
}
