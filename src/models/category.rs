use serde::{Deserialize, Serialize};

/// Closed set of spending categories. `Other` is the categorizer's
/// fallback and carries no budget threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Transportation,
    Utilities,
    Dining,
    Entertainment,
    Other,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Self::Groceries,
            Self::Transportation,
            Self::Utilities,
            Self::Dining,
            Self::Entertainment,
            Self::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Dining => "Dining",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
