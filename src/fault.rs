//! Fault classification as a first-match decision table
//!
//! Rules are checked top to bottom and the first one whose condition holds
//! decides the fault. Later rules are never evaluated once one matches, and
//! a sample that matches none is `Normal`.
//!
//! | Rule | When | Fault |
//! |------|------|-------|
//! | R1 | `hydrogen > 1000` | Arcing, corona (F3 and F4) |
//! | R2 | `c2h4 > 100 \|\| co > 1000 \|\| co2 > 15000` | Severe overheating or arcing (F3) |
//! | R3 | `c2h6 > 35` | Local overheating (F1) |
//! | R4 | `ch4 > 80` | Sparking (F2) |
//! | default | | Normal (F5) |
//!
//! Every comparison is strict: a value equal to its limit falls through to
//! the next rule. NaN compares false everywhere and so ends up `Normal`.

use crate::gas::GasReading;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const HYDROGEN_LIMIT_PPM: f64 = 1000.0;
pub const ETHYLENE_LIMIT_PPM: f64 = 100.0;
pub const CARBON_MONOXIDE_LIMIT_PPM: f64 = 1000.0;
pub const CARBON_DIOXIDE_LIMIT_PPM: f64 = 15000.0;
pub const ETHANE_LIMIT_PPM: f64 = 35.0;
pub const METHANE_LIMIT_PPM: f64 = 80.0;

/// Rule id reported when no conditional rule fires
pub const DEFAULT_RULE_ID: &str = "default";

/// The five possible classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FaultType {
    ArcingCorona,
    SevereOverheating,
    LocalOverheating,
    Sparking,
    Normal,
}

impl FaultType {
    pub const ALL: [FaultType; 5] = [
        FaultType::ArcingCorona,
        FaultType::SevereOverheating,
        FaultType::LocalOverheating,
        FaultType::Sparking,
        FaultType::Normal,
    ];

    /// Display string used in the `Fault Type` entry
    pub fn as_str(self) -> &'static str {
        match self {
            FaultType::ArcingCorona => "Arcing,Corona Fault code: F3 AND F4",
            FaultType::SevereOverheating => "Severe Overheating or Arcing Fault code: F3",
            FaultType::LocalOverheating => "Local overheating Fault code: F1",
            FaultType::Sparking => "Sparking Fault code: F2",
            FaultType::Normal => "Normal Fault code: F5",
        }
    }

    /// Short fault code
    pub fn code(self) -> &'static str {
        match self {
            FaultType::ArcingCorona => "F3/F4",
            FaultType::SevereOverheating => "F3",
            FaultType::LocalOverheating => "F1",
            FaultType::Sparking => "F2",
            FaultType::Normal => "F5",
        }
    }

    pub fn is_fault(self) -> bool {
        self != FaultType::Normal
    }
}

impl fmt::Display for FaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FaultType> for String {
    fn from(fault: FaultType) -> Self {
        fault.as_str().to_string()
    }
}

impl TryFrom<String> for FaultType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        FaultType::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown fault type: {}", s))
    }
}

/// Quantities the rules look at: the raw reading plus derived hydrogen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicators {
    pub reading: GasReading,
    pub hydrogen: f64,
}

/// One row of the decision table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaultRule {
    /// Rule id (`R1`..)
    pub id: &'static str,
    /// Condition as written in the table
    pub when: &'static str,
    /// Fault assigned when the condition holds
    pub then: FaultType,
    #[serde(skip_serializing)]
    test: fn(&Indicators) -> bool,
}

impl FaultRule {
    pub fn matches(&self, ind: &Indicators) -> bool {
        (self.test)(ind)
    }
}

/// Conditional rules in priority order
pub const FAULT_RULES: [FaultRule; 4] = [
    FaultRule {
        id: "R1",
        when: "hydrogen > 1000",
        then: FaultType::ArcingCorona,
        test: hydrogen_high,
    },
    FaultRule {
        id: "R2",
        when: "c2h4 > 100 || co > 1000 || co2 > 15000",
        then: FaultType::SevereOverheating,
        test: severe_overheating,
    },
    FaultRule {
        id: "R3",
        when: "c2h6 > 35",
        then: FaultType::LocalOverheating,
        test: ethane_high,
    },
    FaultRule {
        id: "R4",
        when: "ch4 > 80",
        then: FaultType::Sparking,
        test: methane_high,
    },
];

fn hydrogen_high(i: &Indicators) -> bool {
    i.hydrogen > HYDROGEN_LIMIT_PPM
}

fn severe_overheating(i: &Indicators) -> bool {
    i.reading.c2h4 > ETHYLENE_LIMIT_PPM
        || i.reading.co > CARBON_MONOXIDE_LIMIT_PPM
        || i.reading.co2 > CARBON_DIOXIDE_LIMIT_PPM
}

fn ethane_high(i: &Indicators) -> bool {
    i.reading.c2h6 > ETHANE_LIMIT_PPM
}

fn methane_high(i: &Indicators) -> bool {
    i.reading.ch4 > METHANE_LIMIT_PPM
}

/// Outcome of classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub fault: FaultType,
    /// Id of the rule that fired, or [`DEFAULT_RULE_ID`]
    pub rule: &'static str,
}

/// Classify a sample by the first matching rule
pub fn classify(ind: &Indicators) -> Classification {
    FAULT_RULES
        .iter()
        .find(|rule| rule.matches(ind))
        .map(|rule| Classification {
            fault: rule.then,
            rule: rule.id,
        })
        .unwrap_or(Classification {
            fault: FaultType::Normal,
            rule: DEFAULT_RULE_ID,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn indicators(reading: GasReading, hydrogen: f64) -> Indicators {
        Indicators { reading, hydrogen }
    }

    // ═══════════════════════════════════════════════════════════════
    // Rule tests (one per rule)
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_r1_arcing_corona() {
        let c = classify(&indicators(GasReading::default(), 1001.0));
        assert_eq!(c.fault, FaultType::ArcingCorona);
        assert_eq!(c.rule, "R1");
    }

    #[rstest]
    #[case(GasReading::new(0.0, 0.0, 101.0, 0.0, 0.0, 0.0))]
    #[case(GasReading::new(0.0, 0.0, 0.0, 0.0, 1001.0, 0.0))]
    #[case(GasReading::new(0.0, 0.0, 0.0, 0.0, 0.0, 15001.0))]
    fn test_r2_severe_overheating(#[case] reading: GasReading) {
        let c = classify(&indicators(reading, 0.0));
        assert_eq!(c.fault, FaultType::SevereOverheating);
        assert_eq!(c.rule, "R2");
    }

    #[test]
    fn test_r3_local_overheating() {
        let reading = GasReading::new(0.0, 36.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(classify(&indicators(reading, 0.0)).fault, FaultType::LocalOverheating);
    }

    #[test]
    fn test_r4_sparking() {
        let reading = GasReading::new(81.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(classify(&indicators(reading, 0.0)).fault, FaultType::Sparking);
    }

    #[test]
    fn test_default_normal() {
        let c = classify(&indicators(GasReading::default(), 0.0));
        assert_eq!(c.fault, FaultType::Normal);
        assert_eq!(c.rule, DEFAULT_RULE_ID);
    }

    // ═══════════════════════════════════════════════════════════════
    // Priority and boundaries
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_first_match_wins() {
        // every condition holds; R1 must decide
        let reading = GasReading::new(500.0, 500.0, 500.0, 0.0, 5000.0, 50000.0);
        assert_eq!(classify(&indicators(reading, 5000.0)).rule, "R1");
        // drop hydrogen; R2 next
        assert_eq!(classify(&indicators(reading, 0.0)).rule, "R2");
    }

    #[rstest]
    #[case(GasReading::default(), 1000.0)]
    #[case(GasReading::new(0.0, 0.0, 100.0, 0.0, 0.0, 0.0), 0.0)]
    #[case(GasReading::new(0.0, 0.0, 0.0, 0.0, 1000.0, 0.0), 0.0)]
    #[case(GasReading::new(0.0, 0.0, 0.0, 0.0, 0.0, 15000.0), 0.0)]
    #[case(GasReading::new(0.0, 35.0, 0.0, 0.0, 0.0, 0.0), 0.0)]
    #[case(GasReading::new(80.0, 0.0, 0.0, 0.0, 0.0, 0.0), 0.0)]
    fn test_limits_are_strict(#[case] reading: GasReading, #[case] hydrogen: f64) {
        assert_eq!(classify(&indicators(reading, hydrogen)).fault, FaultType::Normal);
    }

    #[test]
    fn test_nan_is_normal() {
        let reading = GasReading::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN);
        assert_eq!(classify(&indicators(reading, f64::NAN)).fault, FaultType::Normal);
    }

    #[test]
    fn test_fault_strings_round_trip() {
        for fault in FaultType::ALL {
            assert_eq!(FaultType::try_from(fault.to_string()), Ok(fault));
        }
        assert!(FaultType::try_from("Broken".to_string()).is_err());
        assert!(!FaultType::Normal.is_fault());
        assert_eq!(FaultType::ArcingCorona.code(), "F3/F4");
    }

    #[test]
    fn test_rules_serialize_without_predicate() {
        let json = serde_json::to_value(FAULT_RULES[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "R1",
                "when": "hydrogen > 1000",
                "then": "Arcing,Corona Fault code: F3 AND F4",
            })
        );
    }
}
