//! UI module for the BMI Calculator GUI
//!
//! # Panel Structure
//! - `toolbar` - Title, Record / Clear History / Reset, Settings dropdown
//! - `input_panel` - Left: age, height, weight and unit selectors
//! - `results_panel` - Center: BMI, category, advisory, or input problems
//! - `reference_panel` - Right: category table, notes, recent readings
//! - `status_bar` - Bottom: history file and status messages

pub mod toolbar;
pub mod input_panel;
pub mod results_panel;
pub mod reference_panel;
pub mod status_bar;
