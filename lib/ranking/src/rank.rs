//! Ranked output types shared by both rankers

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tastebud_core::{Catalog, Item};

/// A catalog item paired with its relevance to the request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub item: Item,
    pub relevance: f32,
}

/// Items ordered by descending relevance
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedResult {
    items: Vec<RankedItem>,
}

impl RankedResult {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn items(&self) -> &[RankedItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedItem> {
        self.items.iter()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|r| r.item.title.as_str()).collect()
    }

    /// Flattened view for similarity results
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.items.iter().map(Recommendation::from).collect()
    }

    /// Flattened view for score results; relevance equals the score there
    pub fn top_rated_entries(&self) -> Vec<TopRatedEntry> {
        self.items.iter().map(TopRatedEntry::from).collect()
    }
}

impl IntoIterator for RankedResult {
    type Item = RankedItem;
    type IntoIter = std::vec::IntoIter<RankedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a RankedItem;
    type IntoIter = std::slice::Iter<'a, RankedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// One similarity recommendation as handed to a presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub descriptor: String,
    pub score: f32,
    pub relevance: f32,
}

impl From<&RankedItem> for Recommendation {
    fn from(ranked: &RankedItem) -> Self {
        Self {
            title: ranked.item.title.clone(),
            descriptor: ranked.item.descriptor.clone(),
            score: ranked.item.score,
            relevance: ranked.relevance,
        }
    }
}

/// One entry of the top-rated list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRatedEntry {
    pub title: String,
    pub descriptor: String,
    pub score: f32,
}

impl From<&RankedItem> for TopRatedEntry {
    fn from(ranked: &RankedItem) -> Self {
        Self {
            title: ranked.item.title.clone(),
            descriptor: ranked.item.descriptor.clone(),
            score: ranked.item.score,
        }
    }
}

/// Stable descending sort of `(position, relevance)` pairs, then materialize
/// the first `top_n` whose position passes `keep`.
///
/// `scored` must be in catalog order so equal relevances keep insertion order.
pub(crate) fn select_top<F>(
    catalog: &Catalog,
    mut scored: Vec<(usize, f32)>,
    top_n: usize,
    keep: F,
) -> RankedResult
where
    F: Fn(usize) -> bool,
{
    scored.sort_by(|a, b| OrderedFloat(b.1).cmp(&OrderedFloat(a.1)));

    let items = scored
        .into_iter()
        .filter(|(position, _)| keep(*position))
        .take(top_n)
        .filter_map(|(position, relevance)| {
            catalog.all_items().get(position).map(|item| RankedItem {
                item: item.clone(),
                relevance,
            })
        })
        .collect();

    RankedResult { items }
}
