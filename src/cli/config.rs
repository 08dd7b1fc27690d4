//! Config and schema CLI commands

use super::util::parse_config_arg;
use dga::*;

pub fn cmd_config(args: &[String], config: &DgaConfig) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("check") => {
            // the config was already loaded by main; getting here means it parsed
            match parse_config_arg(args) {
                Some(path) => println!("✓ {} is valid", path.display()),
                None => println!("✓ Configuration is valid"),
            }
            Ok(())
        }
        Some("show") => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
        Some(cmd) => Err(Error::Usage(format!(
            "Unknown config subcommand: {}. Use 'check' or 'show'.",
            cmd
        ))),
        None => Err(Error::Usage("dga config <check|show> [--config <path>]".into())),
    }
}

pub fn cmd_schema(args: &[String]) -> Result<()> {
    println!("{}", schema_text(args.first().map(String::as_str))?);
    Ok(())
}

/// Schema listing or the pretty JSON schema for one output type
pub fn schema_text(name: Option<&str>) -> Result<String> {
    match name.unwrap_or("list") {
        "list" => Ok("Available schemas: result, config".to_string()),
        "result" => schema_json::<DgaResult>(),
        "config" => schema_json::<DgaConfig>(),
        other => Err(Error::Usage(format!("Unknown schema: {}", other))),
    }
}

fn schema_json<T: schemars::JsonSchema>() -> Result<String> {
    let schema = schemars::schema_for!(T);
    Ok(serde_json::to_string_pretty(&schema)?)
}
