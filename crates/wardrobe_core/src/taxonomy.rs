use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level garment category.
///
/// Declaration order is the canonical taxonomy order; `Ord` follows it, so
/// any ordered collection keyed by `Category` iterates tops first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Top,
    Bottom,
    Outer,
    Shoes,
    Accessory,
}

const TOP_SUBCATEGORIES: &[&str] = &["티셔츠", "셔츠", "블라우스", "후드티", "맨투맨"];
const BOTTOM_SUBCATEGORIES: &[&str] = &["청바지", "슬랙스", "치마", "반바지", "레깅스"];
const OUTER_SUBCATEGORIES: &[&str] = &["재킷", "코트", "패딩", "가디건", "조끼"];
const SHOES_SUBCATEGORIES: &[&str] = &["운동화", "구두", "부츠", "샌들", "슬리퍼"];
const ACCESSORY_SUBCATEGORIES: &[&str] = &["모자", "가방", "벨트", "목도리"];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Top,
        Category::Bottom,
        Category::Outer,
        Category::Shoes,
        Category::Accessory,
    ];

    /// Display name used by the sidebar and the tag prompt.
    pub fn label(self) -> &'static str {
        match self {
            Category::Top => "상의",
            Category::Bottom => "하의",
            Category::Outer => "아우터",
            Category::Shoes => "신발",
            Category::Accessory => "액세서리",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Declared subcategories, in display order.
    pub fn subcategories(self) -> &'static [&'static str] {
        match self {
            Category::Top => TOP_SUBCATEGORIES,
            Category::Bottom => BOTTOM_SUBCATEGORIES,
            Category::Outer => OUTER_SUBCATEGORIES,
            Category::Shoes => SHOES_SUBCATEGORIES,
            Category::Accessory => ACCESSORY_SUBCATEGORIES,
        }
    }

    pub fn has_subcategory(self, name: &str) -> bool {
        self.subcategories().contains(&name)
    }

    /// Returns the taxonomy's own `'static` spelling of `name`.
    pub fn subcategory(self, name: &str) -> Option<&'static str> {
        self.subcategories().iter().copied().find(|s| *s == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Finds the category that declares `subcategory`.
pub fn parent_of(subcategory: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|c| c.has_subcategory(subcategory))
}

/// One category of the taxonomy together with the subcategories that
/// survived a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyMatch {
    pub category: Category,
    pub subcategories: Vec<&'static str>,
}

/// Filters the taxonomy by a case-insensitive substring query.
///
/// A category is kept when the query occurs in its label or in any of its
/// subcategories. A subcategory is kept when the query occurs in its own name
/// or in its parent's label, so matching a category keeps all of its rows.
/// An empty query yields the whole taxonomy.
pub fn search_taxonomy(query: &str) -> impl Iterator<Item = TaxonomyMatch> + use<> {
    let needle = query.trim().to_lowercase();
    Category::ALL.into_iter().filter_map(move |category| {
        let category_hit = category.label().to_lowercase().contains(&needle);
        let subcategories: Vec<&'static str> = category
            .subcategories()
            .iter()
            .copied()
            .filter(|sub| category_hit || sub.to_lowercase().contains(&needle))
            .collect();
        if subcategories.is_empty() {
            None
        } else {
            Some(TaxonomyMatch {
                category,
                subcategories,
            })
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn canonical_order_matches_declaration() {
        let mut shuffled = vec![Category::Shoes, Category::Top, Category::Accessory];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Category::Top, Category::Shoes, Category::Accessory]
        );
    }

    #[test]
    fn every_category_has_four_or_five_subcategories() {
        for c in Category::ALL {
            let n = c.subcategories().len();
            assert!((4..=5).contains(&n), "{c} has {n}");
        }
    }

    #[test]
    fn labels_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_label(c.label()), Some(c));
        }
        assert_eq!(Category::from_label("바지"), None);
    }

    #[rstest]
    #[case("후드티", Some(Category::Top))]
    #[case("청바지", Some(Category::Bottom))]
    #[case("목도리", Some(Category::Accessory))]
    #[case("상의", None)]
    fn parent_lookup(#[case] sub: &str, #[case] expected: Option<Category>) {
        assert_eq!(parent_of(sub), expected);
    }

    #[test]
    fn empty_query_returns_everything() {
        let all: Vec<_> = search_taxonomy("").collect();
        assert_eq!(all.len(), 5);
        for m in &all {
            assert_eq!(m.subcategories, m.category.subcategories());
        }
        assert_eq!(search_taxonomy("   ").count(), 5);
    }

    #[test]
    fn subcategory_query_keeps_single_row() {
        let hits: Vec<_> = search_taxonomy("후드").collect();
        assert_eq!(
            hits,
            vec![TaxonomyMatch {
                category: Category::Top,
                subcategories: vec!["후드티"],
            }]
        );
    }

    #[test]
    fn category_query_keeps_all_children() {
        let hits: Vec<_> = search_taxonomy("신발").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subcategories.len(), 5);
    }

    #[test]
    fn query_matching_several_rows() {
        let hits: Vec<_> = search_taxonomy("셔츠").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subcategories, vec!["티셔츠", "셔츠"]);

        let cats: Vec<_> = search_taxonomy("스").map(|m| m.category).collect();
        assert_eq!(cats, vec![Category::Top, Category::Bottom]);
        let bottoms = search_taxonomy("스").nth(1).map(|m| m.subcategories);
        assert_eq!(bottoms, Some(vec!["슬랙스", "레깅스"]));
    }

    #[test]
    fn unmatched_query_is_empty() {
        assert_eq!(search_taxonomy("zzz").count(), 0);
    }
}
