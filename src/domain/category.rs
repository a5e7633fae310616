//! Curated browse categories.
//!
//! Categories are fixed names the home view offers as shortcuts. Selecting one
//! runs a search with the lower-cased name as the query term.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A browse category shown on the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub emoji: &'static str,
}

/// Every category in display order.
pub const CATEGORIES: [Category; 10] = [
    Category { name: "Nature", emoji: "🌿" },
    Category { name: "Space", emoji: "🌌" },
    Category { name: "Abstract", emoji: "🎨" },
    Category { name: "Minimalist", emoji: "⚪" },
    Category { name: "Technology", emoji: "💻" },
    Category { name: "Ocean", emoji: "🌊" },
    Category { name: "Mountains", emoji: "🏔️" },
    Category { name: "Sunset", emoji: "🌅" },
    Category { name: "Architecture", emoji: "🏛️" },
    Category { name: "Animals", emoji: "🦋" },
];

/// Suggestions offered when a search comes back empty.
pub const SEARCH_SUGGESTIONS: [&str; 15] = [
    "nature",
    "mountains",
    "ocean",
    "sunset",
    "abstract",
    "minimalist",
    "space",
    "city",
    "forest",
    "flowers",
    "architecture",
    "technology",
    "animals",
    "landscape",
    "art",
];

/// Resolves loosely typed input (e.g. `"mount"`, `"archi"`) to a category.
///
/// An exact case-insensitive match wins; otherwise the best fuzzy match is
/// returned. `None` when nothing matches at all.
///
/// # Examples
///
/// ```
/// use lumina::domain::resolve_category;
///
/// assert_eq!(resolve_category("ocean").map(|c| c.name), Some("Ocean"));
/// assert_eq!(resolve_category("mntns").map(|c| c.name), Some("Mountains"));
/// assert!(resolve_category("zzzz").is_none());
/// ```
#[must_use]
pub fn resolve_category(input: &str) -> Option<&'static Category> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(exact) = CATEGORIES.iter().find(|c| c.name.to_lowercase() == needle) {
        return Some(exact);
    }

    let matcher = SkimMatcherV2::default();
    let best = CATEGORIES
        .iter()
        .filter_map(|c| {
            matcher
                .fuzzy_match(&c.name.to_lowercase(), &needle)
                .map(|score| (score, c))
        })
        .max_by_key(|(score, _)| *score)
        .map(|(_, c)| c);

    tracing::trace!(input = %input, resolved = ?best.map(|c| c.name), "category lookup");
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_ignores_case() {
        assert_eq!(resolve_category("NATURE").map(|c| c.name), Some("Nature"));
    }

    #[test]
    fn empty_input_resolves_to_nothing() {
        assert!(resolve_category("   ").is_none());
    }
}
