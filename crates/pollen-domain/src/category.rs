//! Category module - the five readings published each collection day

use std::fmt;

/// A tracked pollen or mold category
///
/// The declaration order is the order the extractor tries labels in, and
/// the order the categories appear on the source page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Tree pollen
    TreePollen,

    /// Grass pollen
    GrassPollen,

    /// Ragweed pollen
    RagweedPollen,

    /// All weed pollen combined
    TotalWeedPollen,

    /// Mold spores
    Mold,
}

impl Category {
    /// Every category, in matching priority order
    pub const ALL: [Category; 5] = [
        Category::TreePollen,
        Category::GrassPollen,
        Category::RagweedPollen,
        Category::TotalWeedPollen,
        Category::Mold,
    ];

    /// Get the label as printed on the source page
    pub fn label(&self) -> &'static str {
        match self {
            Category::TreePollen => "Tree Pollen",
            Category::GrassPollen => "Grass Pollen",
            Category::RagweedPollen => "Ragweed Pollen",
            Category::TotalWeedPollen => "Total Weed Pollen",
            Category::Mold => "Mold",
        }
    }

    /// Parse a category from its full label, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.label().to_lowercase() == wanted)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_page_order() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["Tree Pollen", "Grass Pollen", "Ragweed Pollen", "Total Weed Pollen", "Mold"]
        );
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Category::parse("tree pollen"), Some(Category::TreePollen));
        assert_eq!(Category::parse("MOLD"), Some(Category::Mold));
        assert_eq!(Category::parse("  Total Weed Pollen "), Some(Category::TotalWeedPollen));
    }

    #[test]
    fn test_parse_requires_full_label() {
        assert_eq!(Category::parse("Tree"), None);
        assert_eq!(Category::parse("Weed"), None);
    }
}
