//! UI module for the Electrical Hub GUI
//!
//! # Panel Structure
//! - `toolbar` - Header with title and theme toggle
//! - `menu_panel` - Left sidebar: one entry per calculator
//! - `input_panel` - Center panel: dispatches to input_* child modules
//! - `results_panel` - Right panel: report, error text, chart, guide
//! - `status_bar` - Bottom status messages
//!
//! # Input Panel Children
//! - `input_resistor` - Color band pick lists
//! - `input_ohms_law` - Mode radios plus the V/I/R/P/PF fields
//! - `input_numeric` - Generic form built from a calculator's field specs
//! - `input_troubleshooting` - Symptom filter
//!
//! # Shared Components
//! - `shared/vi_chart` - Canvas drawing for the voltage-vs-current chart

// Top-level panels
pub mod toolbar;
pub mod menu_panel;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

// Input panel children
pub mod input_numeric;
pub mod input_ohms_law;
pub mod input_resistor;
pub mod input_troubleshooting;

// Shared components
pub mod shared;
