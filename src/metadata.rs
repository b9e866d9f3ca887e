//! Fixed metadata vocabularies and the per-item metadata record.
//!
//! Every generated item carries the same fixed set of metadata fields, each
//! populated independently at random from its own vocabulary. The record is
//! a typed struct rather than an open map so the field contract is part of
//! the API, while serialization keeps the upstream JSON field names.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::{pick, random_recent_timestamp, random_subset, random_value};

pub const NAMES: [&str; 24] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi",
    "Psi", "Omega",
];

pub const ATTRIBUTES: [&str; 15] = [
    "Small", "Medium", "Large", "Extra Large", "Compact", "Expanded", "Basic", "Advanced",
    "Premium", "Standard", "Custom", "Regular", "Special", "Limited", "Unlimited",
];

pub const CATEGORIES: [&str; 10] = [
    "Primary", "Secondary", "Tertiary", "Quaternary", "Quinary", "Senary", "Septenary", "Octonary",
    "Nonary", "Denary",
];

pub const TYPES: [&str; 10] = [
    "Type A", "Type B", "Type C", "Type D", "Type E", "Type F", "Type G", "Type H", "Type I",
    "Type J",
];

pub const RATINGS: [u8; 5] = [1, 2, 3, 4, 5];

pub const STATUSES: [&str; 5] = ["Active", "Inactive", "Pending", "Archived", "Draft"];

pub const PRIORITIES: [&str; 4] = ["Low", "Medium", "High", "Critical"];

pub const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

pub const DEPARTMENTS: [&str; 6] = ["Sales", "Marketing", "Engineering", "Support", "Finance", "HR"];

/// Randomized metadata attached to every generated item.
///
/// Field names in the serialized form match the wire format consumed by the
/// visualization front end (`type`, `isActive`, RFC 3339 `created`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Display name, an attribute/name pair like `"Premium Sigma"`.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    /// 1-5 star rating.
    pub rating: u8,
    /// Uniform in [10, 1000), truncated to 2 decimals.
    pub value: f64,
    pub status: String,
    pub priority: String,
    pub region: String,
    pub department: String,
    /// Timestamp within the past 365 days.
    pub created: DateTime<Utc>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// 1-100.
    pub score: u32,
    /// 0-5 distinct entries from the attributes vocabulary.
    pub tags: Vec<String>,
}

impl Metadata {
    /// Populate every field independently at random from its vocabulary.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Metadata {
            name: format!("{} {}", pick(rng, &ATTRIBUTES), pick(rng, &NAMES)),
            kind: (*pick(rng, &TYPES)).to_string(),
            category: (*pick(rng, &CATEGORIES)).to_string(),
            rating: *pick(rng, &RATINGS),
            value: random_value(rng, 10.0, 1000.0, 2),
            status: (*pick(rng, &STATUSES)).to_string(),
            priority: (*pick(rng, &PRIORITIES)).to_string(),
            region: (*pick(rng, &REGIONS)).to_string(),
            department: (*pick(rng, &DEPARTMENTS)).to_string(),
            created: random_recent_timestamp(rng),
            is_active: rng.random_bool(0.8),
            score: rng.random_range(1..=100),
            tags: random_subset(rng, &ATTRIBUTES, 0, 5)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// All fields as `(serialized name, value)` pairs, in wire order.
    ///
    /// This is the generic view used by legend derivation; the typed struct
    /// fields remain the primary access path.
    pub fn fields(&self) -> Vec<(&'static str, MetadataValue)> {
        vec![
            ("name", MetadataValue::Str(self.name.clone())),
            ("type", MetadataValue::Str(self.kind.clone())),
            ("category", MetadataValue::Str(self.category.clone())),
            ("rating", MetadataValue::Int(self.rating as i64)),
            ("value", MetadataValue::Float(self.value)),
            ("status", MetadataValue::Str(self.status.clone())),
            ("priority", MetadataValue::Str(self.priority.clone())),
            ("region", MetadataValue::Str(self.region.clone())),
            ("department", MetadataValue::Str(self.department.clone())),
            ("created", MetadataValue::Timestamp(self.created)),
            ("isActive", MetadataValue::Bool(self.is_active)),
            ("score", MetadataValue::Int(self.score as i64)),
            ("tags", MetadataValue::Tags(self.tags.clone())),
        ]
    }
}

/// A single metadata value, tagged by shape.
///
/// Lets legend derivation treat the fixed fields generically without
/// giving up the typed struct.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Tags(Vec<String>),
}

impl MetadataValue {
    /// Discrete label for legend grouping.
    ///
    /// Continuous (`Float`, `Timestamp`) and compound (`Tags`) values have
    /// no single label and return `None`.
    pub fn label(&self) -> Option<String> {
        match self {
            MetadataValue::Str(s) => Some(s.clone()),
            MetadataValue::Int(i) => Some(i.to_string()),
            MetadataValue::Bool(b) => Some(b.to_string()),
            MetadataValue::Float(_) | MetadataValue::Timestamp(_) | MetadataValue::Tags(_) => None,
        }
    }
}
