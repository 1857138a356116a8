//! # bmi_core - BMI Calculation Engine
//!
//! `bmi_core` converts a body measurement into a Body Mass Index, classifies
//! it into one of four health categories, and provides the validation,
//! reference data and history storage the front ends build on.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The calculation is a pure function of its input
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use bmi_core::calculations::{calculate, Category, Measurement};
//! use bmi_core::units::{HeightUnit, WeightUnit};
//!
//! let m = Measurement {
//!     age: 30,
//!     height: 170.0,
//!     height_unit: HeightUnit::Centimeters,
//!     weight: 90.0,
//!     weight_unit: WeightUnit::Kilograms,
//! };
//!
//! let result = calculate(&m).unwrap();
//! assert_eq!(result.category, Category::Obese);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The BMI engine: conversion, formula, classification
//! - [`units`] - Type-safe unit wrappers and unit selectors
//! - [`validation`] - Range checks and form parsing
//! - [`reference`] - Static category table and notes
//! - [`records`] - Users, saved readings, preferences
//! - [`file_io`] - Atomic history file saves
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod records;
pub mod reference;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, classify, compute_bmi, BmiResult, Category, DisplayColor, Measurement};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_history, load_or_default, save_history};
pub use records::{BmiRecord, History, Preferences, User};
pub use validation::MeasurementForm;
