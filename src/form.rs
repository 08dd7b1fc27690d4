//! Terminal form around the evaluator
//!
//! The form asks for the six concentrations, submits them as one unit and
//! shows either the result or a fixed error notification. Nothing carries
//! over between submissions: each one owns its six raw strings, parses
//! them, and hands the numbers straight to [`GasReading::evaluate`].

use crate::config::{DgaConfig, OutputFormat};
use crate::error::{Error, Result, INVALID_INPUT_MESSAGE};
use crate::evaluate::DgaResult;
use crate::gas::{Gas, GasReading};
use std::io::{BufRead, Write};

/// Title of the result notification
pub const RESULTS_TITLE: &str = "DGA Results";

/// Title of the error notification
pub const ERROR_TITLE: &str = "Error";

/// Lines that close the form
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Six raw text fields, in [`Gas::ALL`] order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    fields: [String; 6],
}

impl FormInput {
    pub fn new(fields: [String; 6]) -> Self {
        Self { fields }
    }

    /// Convenience constructor for borrowed text
    pub fn from_strs(fields: [&str; 6]) -> Self {
        Self::new(fields.map(str::to_string))
    }

    /// Raw text of one field
    pub fn field(&self, gas: Gas) -> &str {
        let idx = Gas::ALL.iter().position(|g| *g == gas).unwrap_or_default();
        &self.fields[idx]
    }

    /// Parse all six fields and evaluate.
    ///
    /// Fails with [`Error::InvalidInput`] if any field is not a number, in
    /// which case nothing is evaluated.
    pub fn submit(&self) -> Result<DgaResult> {
        let reading = GasReading::from_fields(&self.fields).inspect_err(|e| {
            if let Error::InvalidInput { field, value } = e {
                tracing::debug!(field = *field, value = %value, "rejected form input");
            }
        })?;
        let result = reading.evaluate();
        tracing::debug!(
            fault = result.fault_type.code(),
            rule = result.matched_rule(),
            "evaluated sample"
        );
        Ok(result)
    }
}

/// What the user sees after pressing Calculate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info { title: String, body: String },
    Error { title: String, body: String },
}

impl Notification {
    /// Build the notification for a submission outcome
    pub fn from_submission(outcome: &Result<DgaResult>, config: &DgaConfig) -> Result<Self> {
        match outcome {
            Ok(result) => Ok(Notification::Info {
                title: RESULTS_TITLE.to_string(),
                body: render_result(result, config)?,
            }),
            Err(e) if e.is_invalid_input() => Ok(Notification::Error {
                title: ERROR_TITLE.to_string(),
                body: INVALID_INPUT_MESSAGE.to_string(),
            }),
            Err(e) => Err(Error::Other(e.to_string())),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error { .. })
    }

    pub fn title(&self) -> &str {
        match self {
            Notification::Info { title, .. } | Notification::Error { title, .. } => title,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Notification::Info { body, .. } | Notification::Error { body, .. } => body,
        }
    }

    /// Title banner followed by the body
    pub fn render(&self) -> String {
        format!("== {} ==\n{}\n", self.title(), self.body())
    }
}

/// Render a result per the configured output format
pub fn render_result(result: &DgaResult, config: &DgaConfig) -> Result<String> {
    let mut out = match config.output {
        OutputFormat::Text => result.to_report(),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    };
    if config.explain {
        out.push('\n');
        out.push_str(&result.explain());
    }
    Ok(out)
}

/// Counts from one interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSummary {
    pub evaluated: usize,
    pub rejected: usize,
}

/// Drive the interactive form until end of input or a quit word.
///
/// Prompts go to `out` with the field labels; a partially filled form at
/// end of input is discarded.
pub fn run_form<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &DgaConfig,
) -> Result<FormSummary> {
    let mut summary = FormSummary::default();
    let mut lines = input.lines();

    writeln!(
        out,
        "DGA Analysis: enter concentrations in ppm ('{}' to close)",
        QUIT_WORDS[0]
    )?;

    'form: loop {
        let mut fields: [String; 6] = Default::default();
        for (gas, slot) in Gas::ALL.iter().zip(fields.iter_mut()) {
            write!(out, "{}: ", gas.field_label())?;
            out.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break 'form,
            };
            if QUIT_WORDS.contains(&line.trim()) {
                break 'form;
            }
            *slot = line;
        }

        let outcome = FormInput::new(fields).submit();
        let notification = Notification::from_submission(&outcome, config)?;
        if notification.is_error() {
            summary.rejected += 1;
        } else {
            summary.evaluated += 1;
        }
        writeln!(out)?;
        write!(out, "{}", notification.render())?;
        writeln!(out)?;
    }

    writeln!(out)?;
    tracing::debug!(
        evaluated = summary.evaluated,
        rejected = summary.rejected,
        "form closed"
    );
    Ok(summary)
}
