use crate::models::Category;

/// One priority tier of the keyword table: a category and the substrings
/// that select it.
pub struct KeywordRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

pub struct Categorizer {
    rules: Vec<KeywordRule>,
}

impl Categorizer {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// Categorizer over the fixed keyword table.
    pub fn standard() -> Self {
        Self::new(super::config::keyword_rules())
    }

    /// Map a description to its category. Rules are checked in table
    /// order and the first keyword hit wins, so a description matching
    /// several tiers always resolves to the highest-priority one.
    /// Total: anything unmatched is `Other`.
    pub fn categorize(&self, description: &str) -> Category {
        let desc_lower = description.to_lowercase();

        for rule in &self.rules {
            if rule.keywords.iter().any(|k| desc_lower.contains(k.as_str())) {
                return rule.category;
            }
        }

        Category::Other
    }
}
