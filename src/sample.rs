//! Built-in demo catalog
//!
//! Ten well-known films with comma-separated genres as descriptors and their
//! ratings as scores. Used by the CLI when no `--catalog` is given.

use tastebud_core::{Catalog, Item, Result};

/// The demo items in catalog order
pub fn movie_items() -> Vec<Item> {
    vec![
        Item::new("Inception", "Sci-Fi, Action", 8.8),
        Item::new("The Dark Knight", "Action, Crime, Drama", 9.0),
        Item::new("Interstellar", "Sci-Fi, Drama", 8.6),
        Item::new("The Matrix", "Action, Sci-Fi", 8.7),
        Item::new("Pulp Fiction", "Crime, Drama", 8.9),
        Item::new("Forrest Gump", "Drama, Romance", 8.8),
        Item::new("The Shawshank Redemption", "Drama, Crime", 9.3),
        Item::new("The Godfather", "Crime, Drama", 9.2),
        Item::new("The Lion King", "Animation, Adventure", 8.5),
        Item::new("Toy Story", "Animation, Family", 8.3),
    ]
}

pub fn movies() -> Result<Catalog> {
    Catalog::new(movie_items())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movies_catalog() {
        let catalog = movies().unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.find_by_title("Toy Story").unwrap().score, 8.3);
    }
}
