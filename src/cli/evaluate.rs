//! Evaluation commands: eval (one-shot) and form (interactive)

use super::util::{flag_value, positionals};
use dga::*;
use std::io;

/// Collect six raw fields from `--ch4 <v>` style flags or, when none are
/// given, from exactly six positional values
fn collect_fields(args: &[String]) -> Result<FormInput> {
    let named: Vec<Option<&str>> = Gas::ALL
        .iter()
        .map(|g| flag_value(args, &format!("--{}", g.cli_name())))
        .collect();

    if named.iter().any(Option::is_some) {
        let mut fields: [String; 6] = Default::default();
        for ((gas, value), slot) in Gas::ALL.iter().zip(&named).zip(fields.iter_mut()) {
            match value {
                Some(v) => *slot = v.to_string(),
                None => {
                    return Err(Error::Usage(format!(
                        "missing --{} (all six gases are required)",
                        gas.cli_name()
                    )))
                }
            }
        }
        return Ok(FormInput::new(fields));
    }

    match <[&str; 6]>::try_from(positionals(args)) {
        Ok(values) => Ok(FormInput::from_strs(values)),
        Err(_) => Err(Error::Usage(
            "dga eval <ch4> <c2h6> <c2h4> <c2h2> <co> <co2> [--json] [--explain]".into(),
        )),
    }
}

pub fn cmd_eval(args: &[String], config: &DgaConfig) -> Result<()> {
    let form = collect_fields(args)?;
    let result = form.submit()?;
    println!("{}", form::render_result(&result, config)?);
    Ok(())
}

pub fn cmd_form(config: &DgaConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = run_form(stdin.lock(), &mut stdout, config)?;
    tracing::info!(
        evaluated = summary.evaluated,
        rejected = summary.rejected,
        "session finished"
    );
    Ok(())
}
