// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # DGA: Dissolved Gas Analysis
//!
//! Fault classification for transformer oil samples from six dissolved gas
//! concentrations.
//!
//! ## Core Concept
//!
//! One pure function does all the work. Given methane, ethane, ethylene,
//! acetylene, carbon monoxide and carbon dioxide readings (ppm) it derives
//! three totals and picks a fault type from a priority-ordered decision
//! table. Everything else in this crate (parsing, configuration, the
//! terminal form, the `dga` binary) is a thin shell around it.
//!
//! ## Quick Start
//!
//! ```rust
//! use dga::{evaluate, FaultType};
//!
//! let result = evaluate(90.0, 0.0, 0.0, 0.0, 0.0, 0.0);
//! assert_eq!(result.total_hydrocarbons, 90.0);
//! assert_eq!(result.fault_type, FaultType::Sparking);
//! println!("{}", result.to_report());
//! ```
//!
//! ## Decision Table
//!
//! | Rule | When | Fault Type |
//! |------|------|------------|
//! | R1 | `hydrogen > 1000` | `Arcing,Corona Fault code: F3 AND F4` |
//! | R2 | `c2h4 > 100 \|\| co > 1000 \|\| co2 > 15000` | `Severe Overheating or Arcing Fault code: F3` |
//! | R3 | `c2h6 > 35` | `Local overheating Fault code: F1` |
//! | R4 | `ch4 > 80` | `Sparking Fault code: F2` |
//! | default | | `Normal Fault code: F5` |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  six text fields ──► GasReading::from_fields ──► GasReading │
//! │        │                    │                               │
//! │        │                    └──► Error::InvalidInput        │
//! │        │                                                    │
//! │  GasReading ──► evaluate ──► DgaResult                      │
//! │                    │                                        │
//! │                    └──► fault::classify (first match)       │
//! │                                                             │
//! │  DgaResult ──► to_report / JSON ──► Notification            │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// Core
pub mod error;
pub mod evaluate;
pub mod fault;
pub mod gas;

// Shell
pub mod config;
pub mod form;
pub mod logging;

// Re-exports
pub use config::{DgaConfig, OutputFormat};
pub use error::{Error, Result, INVALID_INPUT_MESSAGE};
pub use evaluate::{evaluate, format_ppm, DgaResult, ResultValue, RESULT_KEYS};
pub use fault::{classify, Classification, FaultRule, FaultType, Indicators, FAULT_RULES};
pub use form::{run_form, FormInput, FormSummary, Notification};
pub use gas::{parse_ppm, Gas, GasReading};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
