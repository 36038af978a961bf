//! Rule categories.

use serde::{Deserialize, Serialize};

/// Audit rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Operations,
    Naming,
    Consistency,
    Structure,
    Schemas,
    Documentation,
}

impl Category {
    /// Get all rule categories.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Operations,
            Self::Naming,
            Self::Consistency,
            Self::Structure,
            Self::Schemas,
            Self::Documentation,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Operations => "Operations",
            Self::Naming => "Naming",
            Self::Consistency => "Consistency",
            Self::Structure => "Structure",
            Self::Schemas => "Schemas",
            Self::Documentation => "Documentation",
        }
    }

    /// Description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Operations => "Operation identity and parameter wiring",
            Self::Naming => "Resource naming in paths",
            Self::Consistency => "Uniform casing across keys and parameters",
            Self::Structure => "API-wide structure such as versioning",
            Self::Schemas => "Schema completeness and reuse",
            Self::Documentation => "Examples for bodies and schemas",
        }
    }
}
