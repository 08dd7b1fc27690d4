//! Evaluation: six gas readings in, a complete `DgaResult` out
//!
//! The arithmetic is fixed and applied in this order:
//!
//! ```text
//! total_hydrocarbons = ch4 + 2*c2h6 + 3*c2h4 + 4*c2h2
//! hydrogen           = total_hydrocarbons - 2*co - 3*co2
//! oxygen             = total_hydrocarbons - hydrogen
//! ```
//!
//! followed by the decision table in [`crate::fault`]. The function is total
//! over every `f64` input and has no side effects.

use crate::fault::{classify, Classification, FaultType, Indicators, FAULT_RULES};
use crate::gas::{Gas, GasReading};
use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

/// Result keys in report order
pub const RESULT_KEYS: [&str; 10] = [
    "CH4",
    "C2H6",
    "C2H4",
    "C2H2",
    "CO",
    "CO2",
    "Total Hydrocarbons",
    "Hydrogen",
    "Oxygen",
    "Fault Type",
];

/// Evaluate one sample
pub fn evaluate(ch4: f64, c2h6: f64, c2h4: f64, c2h2: f64, co: f64, co2: f64) -> DgaResult {
    GasReading::new(ch4, c2h6, c2h4, c2h2, co, co2).evaluate()
}

impl GasReading {
    /// Derive totals and classify this reading
    pub fn evaluate(&self) -> DgaResult {
        let total_hydrocarbons = self.ch4 + 2.0 * self.c2h6 + 3.0 * self.c2h4 + 4.0 * self.c2h2;
        let hydrogen = total_hydrocarbons - 2.0 * self.co - 3.0 * self.co2;
        let oxygen = total_hydrocarbons - hydrogen;

        let Classification { fault, rule } = classify(&Indicators {
            reading: *self,
            hydrogen,
        });

        DgaResult {
            ch4: self.ch4,
            c2h6: self.c2h6,
            c2h4: self.c2h4,
            c2h2: self.c2h2,
            co: self.co,
            co2: self.co2,
            total_hydrocarbons,
            hydrogen,
            oxygen,
            fault_type: fault,
            matched_rule: rule,
        }
    }
}

/// Outcome of one evaluation.
///
/// Built fully populated by [`evaluate`] and never mutated. Serializes as an
/// object whose keys are [`RESULT_KEYS`] in order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
#[schemars(title = "DGA Result", description = "Dissolved gas analysis of one oil sample")]
pub struct DgaResult {
    #[serde(rename = "CH4")]
    pub ch4: f64,
    #[serde(rename = "C2H6")]
    pub c2h6: f64,
    #[serde(rename = "C2H4")]
    pub c2h4: f64,
    #[serde(rename = "C2H2")]
    pub c2h2: f64,
    #[serde(rename = "CO")]
    pub co: f64,
    #[serde(rename = "CO2")]
    pub co2: f64,

    /// `CH4 + 2*C2H6 + 3*C2H4 + 4*C2H2`
    #[serde(rename = "Total Hydrocarbons")]
    pub total_hydrocarbons: f64,

    /// `Total Hydrocarbons - 2*CO - 3*CO2`
    #[serde(rename = "Hydrogen")]
    pub hydrogen: f64,

    /// `Total Hydrocarbons - Hydrogen`
    #[serde(rename = "Oxygen")]
    pub oxygen: f64,

    #[serde(rename = "Fault Type")]
    #[schemars(with = "String")]
    pub fault_type: FaultType,

    #[serde(skip)]
    matched_rule: &'static str,
}

/// A single value in the ordered result view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultValue {
    Number(f64),
    Text(&'static str),
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Number(n) => f.write_str(&format_ppm(*n)),
            ResultValue::Text(s) => f.write_str(s),
        }
    }
}

/// Render a number the way the result display shows it.
///
/// Whole numbers keep their `.0` (`90.0`). Outside `1e-4 <= |n| < 1e16`
/// the exponent is signed and at least two digits (`1e+16`, `1.5e-05`),
/// and the special values read `nan`, `inf` and `-inf`.
pub fn format_ppm(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Debug switches to exponent form at the same magnitudes
    let debug = format!("{:?}", n);
    match debug.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => debug,
    }
}

impl DgaResult {
    /// The input reading this result was computed from
    pub fn reading(&self) -> GasReading {
        GasReading::new(self.ch4, self.c2h6, self.c2h4, self.c2h2, self.co, self.co2)
    }

    /// Id of the decision rule that produced `fault_type`
    pub fn matched_rule(&self) -> &'static str {
        self.matched_rule
    }

    /// Ordered (label, value) pairs, keys as in [`RESULT_KEYS`]
    pub fn entries(&self) -> [(&'static str, ResultValue); 10] {
        let reading = self.reading();
        let gas = |g: Gas| (g.key(), ResultValue::Number(reading.get(g)));
        [
            gas(Gas::Methane),
            gas(Gas::Ethane),
            gas(Gas::Ethylene),
            gas(Gas::Acetylene),
            gas(Gas::CarbonMonoxide),
            gas(Gas::CarbonDioxide),
            (RESULT_KEYS[6], ResultValue::Number(self.total_hydrocarbons)),
            (RESULT_KEYS[7], ResultValue::Number(self.hydrogen)),
            (RESULT_KEYS[8], ResultValue::Number(self.oxygen)),
            (RESULT_KEYS[9], ResultValue::Text(self.fault_type.as_str())),
        ]
    }

    /// Look up one entry by its label
    pub fn get(&self, key: &str) -> Option<ResultValue> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Ten `key: value` lines in report order
    pub fn to_report(&self) -> String {
        self.entries()
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One line naming the rule that fired
    pub fn explain(&self) -> String {
        match FAULT_RULES.iter().find(|r| r.id == self.matched_rule) {
            Some(rule) => format!("Rule {}: {} → {}", rule.id, rule.when, rule.then.code()),
            None => format!("No rule matched → {}", self.fault_type.code()),
        }
    }
}
