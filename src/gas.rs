//! Gas species and sample readings
//!
//! A sample is six concentrations in parts per million. Values are not
//! range-checked: zero, negative and very large readings are all accepted
//! and flow through the arithmetic unchanged.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six dissolved gases measured in a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Gas {
    /// Methane
    #[serde(rename = "CH4")]
    Methane,
    /// Ethane
    #[serde(rename = "C2H6")]
    Ethane,
    /// Ethylene
    #[serde(rename = "C2H4")]
    Ethylene,
    /// Acetylene
    #[serde(rename = "C2H2")]
    Acetylene,
    /// Carbon monoxide
    #[serde(rename = "CO")]
    CarbonMonoxide,
    /// Carbon dioxide
    #[serde(rename = "CO2")]
    CarbonDioxide,
}

impl Gas {
    /// All gases in form and report order
    pub const ALL: [Gas; 6] = [
        Gas::Methane,
        Gas::Ethane,
        Gas::Ethylene,
        Gas::Acetylene,
        Gas::CarbonMonoxide,
        Gas::CarbonDioxide,
    ];

    /// Key used in the result mapping (`"CH4"`)
    pub fn key(self) -> &'static str {
        match self {
            Gas::Methane => "CH4",
            Gas::Ethane => "C2H6",
            Gas::Ethylene => "C2H4",
            Gas::Acetylene => "C2H2",
            Gas::CarbonMonoxide => "CO",
            Gas::CarbonDioxide => "CO2",
        }
    }

    /// Label shown next to the input field (`"CH4 (ppm)"`)
    pub fn field_label(self) -> &'static str {
        match self {
            Gas::Methane => "CH4 (ppm)",
            Gas::Ethane => "C2H6 (ppm)",
            Gas::Ethylene => "C2H4 (ppm)",
            Gas::Acetylene => "C2H2 (ppm)",
            Gas::CarbonMonoxide => "CO (ppm)",
            Gas::CarbonDioxide => "CO2 (ppm)",
        }
    }

    /// Lowercase name used for `--ch4` style CLI flags
    pub fn cli_name(self) -> &'static str {
        match self {
            Gas::Methane => "ch4",
            Gas::Ethane => "c2h6",
            Gas::Ethylene => "c2h4",
            Gas::Acetylene => "c2h2",
            Gas::CarbonMonoxide => "co",
            Gas::CarbonDioxide => "co2",
        }
    }

    /// Look up a gas by key or CLI name, case-insensitively
    pub fn from_name(name: &str) -> Option<Gas> {
        Gas::ALL
            .into_iter()
            .find(|g| g.key().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Six gas concentrations (ppm) from one oil sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct GasReading {
    pub ch4: f64,
    pub c2h6: f64,
    pub c2h4: f64,
    pub c2h2: f64,
    pub co: f64,
    pub co2: f64,
}

impl GasReading {
    pub fn new(ch4: f64, c2h6: f64, c2h4: f64, c2h2: f64, co: f64, co2: f64) -> Self {
        Self {
            ch4,
            c2h6,
            c2h4,
            c2h2,
            co,
            co2,
        }
    }

    /// Concentration of a single gas
    pub fn get(&self, gas: Gas) -> f64 {
        match gas {
            Gas::Methane => self.ch4,
            Gas::Ethane => self.c2h6,
            Gas::Ethylene => self.c2h4,
            Gas::Acetylene => self.c2h2,
            Gas::CarbonMonoxide => self.co,
            Gas::CarbonDioxide => self.co2,
        }
    }

    /// Build a reading from six raw text fields in [`Gas::ALL`] order.
    ///
    /// The whole submission is rejected on the first field that does not
    /// parse; no partial reading is ever produced.
    pub fn from_fields<S: AsRef<str>>(fields: &[S; 6]) -> Result<Self> {
        let mut values = [0.0_f64; 6];
        for (slot, (gas, raw)) in values.iter_mut().zip(Gas::ALL.iter().zip(fields)) {
            *slot = parse_ppm(*gas, raw.as_ref())?;
        }
        let [ch4, c2h6, c2h4, c2h2, co, co2] = values;
        Ok(Self::new(ch4, c2h6, c2h4, c2h2, co, co2))
    }
}

/// Parse one field as a real number.
///
/// Surrounding whitespace is ignored. Anything `f64` parsing accepts is a
/// number, including exponents, `inf` and `NaN`. Single underscores between
/// digits group them (`1_000`); any other underscore makes the field invalid.
pub fn parse_ppm(gas: Gas, raw: &str) -> Result<f64> {
    let invalid = || Error::InvalidInput {
        field: gas.key(),
        value: raw.to_string(),
    };
    let text = strip_digit_separators(raw.trim()).ok_or_else(invalid)?;
    text.parse::<f64>().map_err(|_| invalid())
}

/// Drop `_` separators that sit between two ASCII digits
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}
