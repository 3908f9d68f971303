//! Expense categories
//!
//! The category set is closed: six fixed labels. Declaration order is the
//! order used for summaries and exports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of an expense
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Housing, utilities, home upkeep
    Casa,
    /// Personal spending
    Personal,
    /// Leisure and going out
    Ocio,
    /// Food and groceries
    #[default]
    Comida,
    /// One-off, irregular expenses
    Eventuales,
    /// Spending for Lolo
    Lolo,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 6] = [
        Category::Casa,
        Category::Personal,
        Category::Ocio,
        Category::Comida,
        Category::Eventuales,
        Category::Lolo,
    ];

    /// Stored (lowercase) name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casa => "casa",
            Self::Personal => "personal",
            Self::Ocio => "ocio",
            Self::Comida => "comida",
            Self::Eventuales => "eventuales",
            Self::Lolo => "lolo",
        }
    }

    /// Uppercase label used in listings and exports
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A category name outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("comida".parse::<Category>().unwrap(), Category::Comida);
        assert_eq!(" OCIO ".parse::<Category>().unwrap(), Category::Ocio);
        assert_eq!("Lolo".parse::<Category>().unwrap(), Category::Lolo);
    }

    #[test]
    fn test_unknown_category() {
        let err = "viajes".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("viajes".into()));
        assert!(err.to_string().contains("casa, personal, ocio"));
    }

    #[test]
    fn test_order_matches_all() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }

    #[test]
    fn test_label_and_default() {
        assert_eq!(Category::Eventuales.label(), "EVENTUALES");
        assert_eq!(Category::default(), Category::Comida);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Casa).unwrap();
        assert_eq!(json, "\"casa\"");
        let back: Category = serde_json::from_str("\"personal\"").unwrap();
        assert_eq!(back, Category::Personal);
    }
}
