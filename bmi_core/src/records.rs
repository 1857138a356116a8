//! # History Data Structures
//!
//! The `History` struct is the root container for saved BMI readings.
//! Histories serialize to `.bmi.json` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! History
//! ├── meta: HistoryMetadata (version, user, timestamps)
//! ├── settings: Preferences (default units, theme)
//! └── records: Vec<BmiRecord> (oldest first)
//! ```
//!
//! The calculation itself never touches a `History`; front ends decide
//! when a result is worth recording.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::records::{BmiRecord, History};
//! use bmi_core::calculations::{compute_bmi, Measurement};
//! use bmi_core::units::{HeightUnit, WeightUnit};
//!
//! let mut history = History::new(None);
//! let m = Measurement {
//!     age: 30,
//!     height: 180.0,
//!     height_unit: HeightUnit::Centimeters,
//!     weight: 75.0,
//!     weight_unit: WeightUnit::Kilograms,
//! };
//! let result = compute_bmi(&m);
//! history.add_record(BmiRecord::from_calculation(&m, &result, None));
//! assert_eq!(history.record_count(), 1);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::bmi::{BmiResult, Category, Measurement};
use crate::units::{HeightUnit, WeightUnit};

/// Current schema version for history files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A person whose readings are recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

impl User {
    /// Create a user with a fresh id
    pub fn new(username: impl Into<String>) -> Self {
        User {
            id: Uuid::new_v4(),
            username: username.into(),
        }
    }
}

/// One saved BMI reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    pub id: Uuid,

    /// Owner of the reading, if the history belongs to a user
    pub user_id: Option<Uuid>,

    /// Input exactly as entered
    pub measurement: Measurement,

    /// Full-precision BMI
    pub bmi: f64,

    pub category: Category,

    pub created_at: DateTime<Utc>,
}

impl BmiRecord {
    /// Stamp a calculation with an id and the current time
    pub fn from_calculation(measurement: &Measurement, result: &BmiResult, user_id: Option<Uuid>) -> Self {
        BmiRecord {
            id: Uuid::new_v4(),
            user_id,
            measurement: *measurement,
            bmi: result.bmi,
            category: result.category,
            created_at: Utc::now(),
        }
    }

    /// BMI rounded to one decimal place, for display
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.bmi)
    }
}

/// Root history container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    /// History metadata (version, user, timestamps)
    pub meta: HistoryMetadata,

    /// User preferences
    #[serde(default)]
    pub settings: Preferences,

    /// Saved readings, oldest first
    #[serde(default)]
    pub records: Vec<BmiRecord>,
}

impl History {
    /// Create a new empty history.
    pub fn new(user: Option<User>) -> Self {
        let now = Utc::now();
        History {
            meta: HistoryMetadata {
                version: SCHEMA_VERSION.to_string(),
                user,
                created: now,
                modified: now,
            },
            settings: Preferences::default(),
            records: Vec::new(),
        }
    }

    /// Append a record. Returns its id.
    pub fn add_record(&mut self, record: BmiRecord) -> Uuid {
        let id = record.id;
        self.records.push(record);
        self.touch();
        id
    }

    /// Remove a record by id.
    ///
    /// Returns the removed record if it existed.
    pub fn remove_record(&mut self, id: &Uuid) -> Option<BmiRecord> {
        let index = self.records.iter().position(|r| &r.id == id)?;
        let record = self.records.remove(index);
        self.touch();
        Some(record)
    }

    /// Most recent record
    pub fn latest(&self) -> Option<&BmiRecord> {
        self.records.last()
    }

    /// Records newest first
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &BmiRecord> {
        self.records.iter().rev().take(limit)
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        if !self.records.is_empty() {
            self.records.clear();
            self.touch();
        }
    }

    /// Number of readings per category
    pub fn category_counts(&self) -> HashMap<Category, usize> {
        let mut counts = HashMap::new();
        for record in &self.records {
            *counts.entry(record.category).or_insert(0) += 1;
        }
        counts
    }

    /// Id of the owning user, if any
    pub fn user_id(&self) -> Option<Uuid> {
        self.meta.user.as_ref().map(|u| u.id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

impl Default for History {
    fn default() -> Self {
        History::new(None)
    }
}

/// History metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Owner of this history
    pub user: Option<User>,

    /// When the history was created
    pub created: DateTime<Utc>,

    /// When the history was last modified
    pub modified: DateTime<Utc>,
}

/// Front-end preferences persisted with the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Height unit preselected in new forms
    pub default_height_unit: HeightUnit,

    /// Weight unit preselected in new forms
    pub default_weight_unit: WeightUnit,

    /// Dark theme enabled
    pub dark_mode: bool,
}
