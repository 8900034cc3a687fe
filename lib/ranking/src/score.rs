//! Query-independent ranking by quality score

use crate::rank::{select_top, RankedResult};
use serde::{Deserialize, Serialize};
use tastebud_core::{ensure_top_n, Catalog, Result};
use tracing::debug;

/// Preference data a caller may hold about a user
///
/// Score ranking is deliberately non-personalized: [`top_rated_for`] accepts
/// this value and does not read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub liked_titles: Vec<String>,
    #[serde(default)]
    pub disliked_titles: Vec<String>,
}

/// The `top_n` highest-scored items; relevance is the score.
/// Equal scores keep catalog order.
pub fn top_rated(catalog: &Catalog, top_n: usize) -> Result<RankedResult> {
    ensure_top_n(top_n)?;

    let scored: Vec<(usize, f32)> = catalog
        .iter()
        .enumerate()
        .map(|(position, item)| (position, item.score))
        .collect();

    let result = select_top(catalog, scored, top_n, |_| true);
    debug!(top_n, returned = result.len(), "score ranking");
    Ok(result)
}

/// Same output as [`top_rated`]. `preferences` is ignored: this ranker models
/// no user signal and must not be treated as collaborative filtering.
pub fn top_rated_for(
    catalog: &Catalog,
    preferences: &UserPreferences,
    top_n: usize,
) -> Result<RankedResult> {
    debug!(
        liked = preferences.liked_titles.len(),
        disliked = preferences.disliked_titles.len(),
        "preferences ignored by score ranking"
    );
    top_rated(catalog, top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tastebud_core::{Error, Item};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("A", "space,action", 8.8),
            Item::new("B", "action,crime", 9.0),
            Item::new("C", "space,drama", 8.6),
        ])
        .unwrap()
    }

    #[test]
    fn test_top_rated() {
        let result = top_rated(&catalog(), 2).unwrap();
        assert_eq!(result.titles(), vec!["B", "A"]);
        assert_eq!(result.items()[0].relevance, 9.0);
        assert_eq!(result.items()[1].relevance, 8.8);
    }

    #[test]
    fn test_top_rated_caps_at_catalog_size() {
        let result = top_rated(&catalog(), 50).unwrap();
        assert_eq!(result.titles(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let catalog = Catalog::new(vec![
            Item::new("Low", "x", 1.0),
            Item::new("First", "x", 5.0),
            Item::new("Second", "x", 5.0),
            Item::new("Third", "x", 5.0),
        ])
        .unwrap();
        let result = top_rated(&catalog, 4).unwrap();
        assert_eq!(result.titles(), vec!["First", "Second", "Third", "Low"]);
    }

    #[test]
    fn test_zero_top_n() {
        assert!(matches!(top_rated(&catalog(), 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(top_rated(&catalog, 3).unwrap().is_empty());
    }

    #[test]
    fn test_preferences_are_ignored() {
        let preferences = UserPreferences {
            liked_titles: vec!["C".to_string()],
            disliked_titles: vec!["B".to_string()],
        };
        let with = top_rated_for(&catalog(), &preferences, 3).unwrap();
        let without = top_rated(&catalog(), 3).unwrap();
        assert_eq!(with, without);
    }
}
