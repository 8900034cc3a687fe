use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// A catalog entry: a unique title, a free-text descriptor and a quality score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(alias = "Title")]
    pub title: String,
    /// Free-text tags or labels, e.g. `"Sci-Fi, Action"`
    #[serde(alias = "Descriptor", alias = "genre", alias = "Genre")]
    pub descriptor: String,
    /// Quality score, e.g. a rating
    #[serde(alias = "Score", alias = "rating", alias = "Rating")]
    pub score: f32,
}

impl Item {
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, descriptor: impl Into<String>, score: f32) -> Self {
        Self {
            title: title.into(),
            descriptor: descriptor.into(),
            score,
        }
    }

    /// Check the fields a catalog relies on
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidArgument("item title must not be empty".to_string()));
        }
        if !self.score.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "score of '{}' is not a finite number: {}",
                self.title, self.score
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_title() {
        let item = Item::new("   ", "drama", 7.0);
        assert!(matches!(item.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_rejects_nan_score() {
        let item = Item::new("Heat", "crime", f32::NAN);
        assert!(matches!(item.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_deserialize_tabular_columns() {
        let item: Item = serde_json::from_str(
            r#"{"Title": "Inception", "Genre": "Sci-Fi, Action", "Rating": 8.8}"#,
        )
        .unwrap();
        assert_eq!(item, Item::new("Inception", "Sci-Fi, Action", 8.8));
    }
}
