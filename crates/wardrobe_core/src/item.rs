use crate::error::TagError;
use crate::taxonomy::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque handle to an imported image.
///
/// The desktop app uses filesystem paths, but nothing in the catalog looks
/// inside the handle; only a [`ContentResolver`](crate::ContentResolver)
/// interprets it. Paths are kept byte-for-byte, including non-UTF-8 names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(PathBuf);

impl ItemId {
    pub fn new(handle: impl Into<PathBuf>) -> Self {
        Self(handle.into())
    }

    /// The handle as UTF-8, when it is.
    pub fn to_str(&self) -> Option<&str> {
        self.0.to_str()
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(PathBuf::from(value))
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(PathBuf::from(value))
    }
}

impl From<&Path> for ItemId {
    fn from(value: &Path) -> Self {
        Self(value.to_path_buf())
    }
}

impl From<PathBuf> for ItemId {
    fn from(value: PathBuf) -> Self {
        Self(value)
    }
}

/// Validated tag selection: one declared subcategory per enabled category.
///
/// Never empty. Iteration follows the canonical taxonomy order regardless of
/// the order the selection was made in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct Tags(BTreeMap<Category, &'static str>);

impl Tags {
    /// Builds tags from `(category label, subcategory)` pairs as a tag prompt
    /// reports them.
    pub fn new<I, C, S>(pairs: I) -> Result<Self, TagError>
    where
        I: IntoIterator<Item = (C, S)>,
        C: AsRef<str>,
        S: AsRef<str>,
    {
        let mut typed = Vec::new();
        for (category, subcategory) in pairs {
            let label = category.as_ref();
            let category = Category::from_label(label)
                .ok_or_else(|| TagError::UnknownCategory(label.to_string()))?;
            typed.push((category, subcategory.as_ref().to_string()));
        }
        Self::from_categories(typed)
    }

    pub fn from_categories<I, S>(pairs: I) -> Result<Self, TagError>
    where
        I: IntoIterator<Item = (Category, S)>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (category, subcategory) in pairs {
            let name = subcategory.as_ref();
            let declared = category.subcategory(name).ok_or_else(|| {
                TagError::UnknownSubcategory {
                    category: category.label().to_string(),
                    subcategory: name.to_string(),
                }
            })?;
            if map.insert(category, declared).is_some() {
                return Err(TagError::DuplicateCategory(category.label().to_string()));
            }
        }
        if map.is_empty() {
            return Err(TagError::Empty);
        }
        Ok(Self(map))
    }

    /// First tagged category in taxonomy order.
    pub fn primary(&self) -> Category {
        // Construction rejects empty maps.
        self.0
            .keys()
            .next()
            .copied()
            .unwrap_or(Category::Top)
    }

    pub fn get(&self, category: Category) -> Option<&'static str> {
        self.0.get(&category).copied()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &'static str)> + '_ {
        self.0.iter().map(|(c, s)| (*c, *s))
    }
}

impl TryFrom<Vec<(String, String)>> for Tags {
    type Error = TagError;

    fn try_from(value: Vec<(String, String)>) -> Result<Self, Self::Error> {
        Tags::new(value)
    }
}

impl From<Tags> for Vec<(String, String)> {
    fn from(value: Tags) -> Self {
        value
            .iter()
            .map(|(c, s)| (c.label().to_string(), s.to_string()))
            .collect()
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (category, sub) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{category}: {sub}")?;
            first = false;
        }
        Ok(())
    }
}

/// One imported image with its tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WardrobeItem {
    pub id: ItemId,
    pub tags: Tags,
    /// Bucket used by the sidebar filter. Fixed at construction from the
    /// canonical taxonomy order, never from selection order.
    pub primary_category: Category,
}

impl WardrobeItem {
    pub fn new(id: ItemId, tags: Tags) -> Self {
        let primary_category = tags.primary();
        Self {
            id,
            tags,
            primary_category,
        }
    }
}

/// One row of a tag prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChoice {
    pub category: Category,
    pub enabled: bool,
    pub subcategory: &'static str,
}

/// Initial state of a tag prompt: every category enabled, each preset to a
/// suggested subcategory (the first declared one unless a suggestion exists).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefaults {
    pub choices: Vec<TagChoice>,
}

impl Default for TagDefaults {
    fn default() -> Self {
        Self::suggest(None)
    }
}

impl TagDefaults {
    /// Presets rows from earlier tags, e.g. when an item is imported again.
    pub fn suggest(previous: Option<&Tags>) -> Self {
        let choices = Category::ALL
            .into_iter()
            .map(|category| {
                let subcategory = previous
                    .and_then(|t| t.get(category))
                    .unwrap_or(category.subcategories()[0]);
                TagChoice {
                    category,
                    enabled: true,
                    subcategory,
                }
            })
            .collect();
        Self { choices }
    }

    /// Pairs for every enabled row, in the shape [`Tags::new`] accepts.
    pub fn selection(&self) -> Vec<(String, String)> {
        self.choices
            .iter()
            .filter(|c| c.enabled)
            .map(|c| (c.category.label().to_string(), c.subcategory.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn primary_follows_taxonomy_not_selection_order() {
        let a = Tags::new([("신발", "부츠"), ("상의", "셔츠")]).unwrap();
        let b = Tags::new([("상의", "셔츠"), ("신발", "부츠")]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.primary(), Category::Top);
        let item = WardrobeItem::new(ItemId::from("x.png"), a);
        assert_eq!(item.primary_category, Category::Top);
    }

    #[rstest]
    #[case(vec![], TagError::Empty)]
    #[case(vec![("바지", "청바지")], TagError::UnknownCategory("바지".into()))]
    #[case(
        vec![("상의", "청바지")],
        TagError::UnknownSubcategory { category: "상의".into(), subcategory: "청바지".into() }
    )]
    #[case(
        vec![("상의", "셔츠"), ("상의", "티셔츠")],
        TagError::DuplicateCategory("상의".into())
    )]
    fn invalid_selections_are_rejected(
        #[case] pairs: Vec<(&str, &str)>,
        #[case] expected: TagError,
    ) {
        assert_eq!(Tags::new(pairs), Err(expected));
    }

    #[test]
    fn serde_goes_through_validation() {
        let tags = Tags::new([("하의", "청바지"), ("아우터", "코트")]).unwrap();
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"[["하의","청바지"],["아우터","코트"]]"#);
        let back: Tags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);

        let bad = serde_json::from_str::<Tags>(r#"[["하의","코트"]]"#);
        assert!(bad.is_err());
    }

    #[test]
    fn defaults_enable_everything_with_first_subcategory() {
        let defaults = TagDefaults::default();
        assert_eq!(defaults.choices.len(), 5);
        assert!(defaults.choices.iter().all(|c| c.enabled));
        let tags = Tags::new(defaults.selection()).unwrap();
        assert_eq!(tags.get(Category::Top), Some("티셔츠"));
        assert_eq!(tags.get(Category::Accessory), Some("모자"));
    }

    #[test]
    fn suggestion_presets_previous_tags() {
        let previous = Tags::new([("하의", "치마")]).unwrap();
        let mut defaults = TagDefaults::suggest(Some(&previous));
        assert_eq!(defaults.choices[1].subcategory, "치마");
        assert_eq!(defaults.choices[0].subcategory, "티셔츠");

        for choice in &mut defaults.choices {
            choice.enabled = choice.category == Category::Bottom;
        }
        assert_eq!(
            defaults.selection(),
            vec![("하의".to_string(), "치마".to_string())]
        );
    }

    #[test]
    fn tags_display_in_canonical_order() {
        let tags = Tags::new([("액세서리", "모자"), ("하의", "치마")]).unwrap();
        assert_eq!(tags.to_string(), "하의: 치마, 액세서리: 모자");
    }

    #[test]
    fn item_id_from_path() {
        let id = ItemId::from(PathBuf::from("/tmp/a.jpg"));
        assert_eq!(id.as_path(), Path::new("/tmp/a.jpg"));
        assert_eq!(id.to_string(), "/tmp/a.jpg");
        assert_eq!(id.to_str(), Some("/tmp/a.jpg"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_kept_exactly() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = Path::new(OsStr::from_bytes(b"/closet/shirt\xff.png"));
        let id = ItemId::from(raw);
        assert_eq!(id.as_path(), raw);
        assert_eq!(id.to_str(), None);
        assert_ne!(id, ItemId::from("/closet/shirt\u{fffd}.png"));
    }
}
