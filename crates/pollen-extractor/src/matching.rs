//! Category label matching

use pollen_domain::Category;

/// Match heading text against the known category labels
///
/// All categories are tried for an exact (case-insensitive) match before any
/// substring match, so a long-form label such as `Tree Pollen` is never
/// claimed through a looser rule. Within each pass the first category in
/// `Category::ALL` order wins.
pub fn match_category(text: &str) -> Option<Category> {
    Category::parse(text).or_else(|| {
        let text = text.to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| text.contains(&c.label().to_lowercase()))
    })
}
