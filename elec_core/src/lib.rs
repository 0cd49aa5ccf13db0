//! # elec_core - Electrical Calculation Engine
//!
//! `elec_core` is the formula library behind the Electrical Hub front
//! ends. Every calculator is a pure function from a small typed input to
//! a typed result; all types serialize to JSON so the same calculations
//! can be driven from the CLI, the GUI, or a script.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Typed Errors**: Bad or insufficient inputs come back as [`CalcError`],
//!   never as an infinite or NaN result
//!
//! ## Quick Start
//!
//! ```rust
//! use elec_core::calculations::{evaluate, CalculatorInput, OhmsLawInput};
//! use elec_core::settings::HubSettings;
//!
//! let input = CalculatorInput::OhmsLaw(OhmsLawInput::dc(10.0, 2.0, 0.0, 0.0));
//! let report = evaluate(&input, &HubSettings::default()).unwrap();
//! assert_eq!(report.value("resistance_ohm"), Some(5.0));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculators and the dispatch layer
//! - [`forms`] - Numeric field schemas used to build input forms
//! - [`report`] - Display-ready results with unit-tagged values
//! - [`troubleshooting`] - Static symptom reference
//! - [`settings`] - Display preferences loaded from TOML
//! - [`units`] - Unit tags and formatting
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod forms;
pub mod report;
pub mod settings;
pub mod troubleshooting;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, CalculatorInput, CalculatorKind};
pub use errors::{CalcError, CalcResult};
pub use forms::{FieldSpec, FieldValues};
pub use report::{CalculatorReport, CurvePoint, ReportField};
pub use settings::HubSettings;
