//! # BMI Calculations
//!
//! The calculation follows the pattern:
//!
//! - [`Measurement`] - Input parameters (JSON-serializable)
//! - [`BmiResult`] - Calculation results (JSON-serializable)
//! - [`compute_bmi`] - Pure calculation, no validation
//! - [`calculate`] - Validate first, then compute
//!
//! ## Available Calculations
//!
//! - [`bmi`] - Body Mass Index with four-way category classification

pub mod bmi;

// Re-export commonly used types
pub use bmi::{
    calculate, classify, compute_bmi, convert_height_to_meters, convert_weight_to_kilograms,
    BmiResult, Category, DisplayColor, Measurement,
};
