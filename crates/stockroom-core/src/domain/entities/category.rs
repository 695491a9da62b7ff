//! The `Category` record.
//!
//! Identity is the `code` alone: two categories with the same code are the
//! same category whatever their name, description or active flag say. An
//! absent code is a legitimate value and equals another absent code.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A product category.
///
/// `PartialEq`, `Eq` and `Hash` are implemented by hand over `code` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
}

impl Category {
    /// Create an active category with the given code and name and no
    /// description.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
            description: None,
            active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for Category {
    fn default() -> Self {
        Self {
            code: None,
            name: None,
            description: None,
            active: true,
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Category{{code={}, name={}, description={}, active={}}}",
            self.code.as_deref().unwrap_or("null"),
            self.name.as_deref().unwrap_or("null"),
            self.description.as_deref().unwrap_or("null"),
            self.active
        )
    }
}
