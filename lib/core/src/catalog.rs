use crate::{Error, Item, Result};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// An immutable, ordered set of items keyed by unique title
///
/// Insertion order is kept as given; rankers use it to break ties.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    by_title: HashMap<String, usize>,
    fingerprint: u64,
}

impl Catalog {
    /// Build a catalog, validating every item and title uniqueness
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut by_title = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            item.validate()?;
            if by_title.insert(item.title.clone(), position).is_some() {
                return Err(Error::DuplicateTitle(item.title.clone()));
            }
        }

        let fingerprint = fingerprint_items(&items);
        debug!(items = items.len(), fingerprint, "catalog loaded");

        Ok(Self {
            items,
            by_title,
            fingerprint,
        })
    }

    /// Parse a JSON array of items
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_reader(reader)?;
        Self::new(items)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Exact, case-sensitive lookup
    pub fn find_by_title(&self, title: &str) -> Result<&Item> {
        self.position(title).map(|position| &self.items[position])
    }

    /// Insertion position of the item with this title
    pub fn position(&self, title: &str) -> Result<usize> {
        self.by_title
            .get(title)
            .copied()
            .ok_or_else(|| Error::NotFound(title.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn all_items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Content hash over titles, descriptors and scores in order.
    /// Equal catalogs share a fingerprint.
    #[inline]
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn fingerprint_items(items: &[Item]) -> u64 {
    let mut hasher = DefaultHasher::new();
    items.len().hash(&mut hasher);
    for item in items {
        item.title.hash(&mut hasher);
        item.descriptor.hash(&mut hasher);
        item.score.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}
