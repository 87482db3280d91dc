//! Built-in demo catalog.
//!
//! The engine runs against a static in-memory catalog by design; this is
//! the stock one used by the demo binary and the heavier benches. Rows
//! mirror a streaming home page: trending and popular titles carry a
//! description, continue-watching rows carry a progress percentage.

use once_cell::sync::Lazy;

use crate::catalog::CatalogItem;

static SAMPLE: Lazy<Vec<CatalogItem>> = Lazy::new(|| {
    vec![
        CatalogItem::new(1, "Stranger Things", "Sci-Fi & Horror")
            .with_year(2024)
            .with_rating("TV-14")
            .with_image("images/thumbnails/stranger-things.jpg")
            .with_description(
                "When a young boy vanishes, a small town uncovers a mystery involving secret experiments.",
            ),
        CatalogItem::new(2, "The Witcher", "Fantasy")
            .with_year(2023)
            .with_rating("TV-MA")
            .with_image("images/thumbnails/witcher.jpg")
            .with_description(
                "Geralt of Rivia, a mutated monster-hunter for hire, journeys toward his destiny.",
            ),
        CatalogItem::new(3, "Breaking Bad", "Crime Drama")
            .with_year(2013)
            .with_rating("TV-MA")
            .with_image("images/thumbnails/breaking-bad.jpg")
            .with_description(
                "A high school chemistry teacher diagnosed with cancer turns to a life of crime.",
            ),
        CatalogItem::new(4, "Wednesday", "Comedy & Horror")
            .with_year(2023)
            .with_rating("TV-14")
            .with_image("images/thumbnails/wednesday.jpg")
            .with_description(
                "Follows Wednesday Addams' years as a student, when she attempts to solve a murder mystery.",
            ),
        CatalogItem::new(5, "Squid Game", "Thriller")
            .with_year(2021)
            .with_rating("TV-MA")
            .with_image("images/thumbnails/squid-game.jpg")
            .with_description(
                "Hundreds of cash-strapped players accept a strange invitation to compete in children's games.",
            ),
        CatalogItem::new(6, "You", "Psychological Thriller")
            .with_year(2023)
            .with_rating("TV-MA")
            .with_image("images/thumbnails/you.jpg")
            .with_progress(65),
        CatalogItem::new(7, "The Last of Us", "Action & Drama")
            .with_year(2023)
            .with_rating("TV-MA")
            .with_image("images/thumbnails/last-of-us.jpg")
            .with_progress(80),
    ]
});

/// A fresh copy of the stock catalog.
pub fn sample_catalog() -> Vec<CatalogItem> {
    SAMPLE.clone()
}
