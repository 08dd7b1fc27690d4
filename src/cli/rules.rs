//! Decision table listing

use dga::fault::DEFAULT_RULE_ID;
use dga::*;
use std::fmt::Write;

pub fn cmd_rules(config: &DgaConfig) -> Result<()> {
    print!("{}", render_rules(config)?);
    Ok(())
}

/// The rule table in the configured output format, newline terminated
pub fn render_rules(config: &DgaConfig) -> Result<String> {
    match config.output {
        OutputFormat::Json => {
            let table = serde_json::json!({
                "rules": FAULT_RULES,
                "default": FaultType::Normal,
            });
            Ok(format!("{}\n", serde_json::to_string_pretty(&table)?))
        }
        OutputFormat::Text => {
            let width = FAULT_RULES.iter().map(|r| r.when.len()).max().unwrap_or(0);
            let mut out = String::new();
            for rule in &FAULT_RULES {
                writeln!(out, "{:<8} {:<width$}  → {}", rule.id, rule.when, rule.then)
                    .map_err(|e| Error::Other(e.to_string()))?;
            }
            writeln!(out, "{:<8} {:<width$}  → {}", DEFAULT_RULE_ID, "", FaultType::Normal)
                .map_err(|e| Error::Other(e.to_string()))?;
            Ok(out)
        }
    }
}
