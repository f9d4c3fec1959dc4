use crate::content::ContentResolver;
use crate::error::ImportError;
use crate::item::{ItemId, TagDefaults, Tags, WardrobeItem};
use crate::taxonomy::Category;
use std::collections::HashMap;

/// Answer of the tag prompt for one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagResponse {
    /// `(category label, subcategory)` for every category left enabled.
    Accepted(Vec<(String, String)>),
    Declined,
}

/// Collaborator that asks the user to tag an image.
pub trait TagPrompt {
    fn prompt(&mut self, id: &ItemId, defaults: &TagDefaults) -> TagResponse;
}

impl<F> TagPrompt for F
where
    F: FnMut(&ItemId, &TagDefaults) -> TagResponse,
{
    fn prompt(&mut self, id: &ItemId, defaults: &TagDefaults) -> TagResponse {
        self(id, defaults)
    }
}

/// Result of importing a single identifier.
#[derive(Debug)]
pub enum ImportOutcome {
    Imported,
    /// The identifier was already present; its tags were overwritten.
    Replaced,
    Declined,
    Failed(ImportError),
}

/// Per-identifier outcomes of one import batch, in input order.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub entries: Vec<(ItemId, ImportOutcome)>,
}

impl ImportReport {
    /// Items stored by this batch, new or overwritten.
    pub fn stored(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, ImportOutcome::Imported | ImportOutcome::Replaced))
            .count()
    }

    pub fn declined(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, ImportOutcome::Declined))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ItemId, &ImportError)> {
        self.entries.iter().filter_map(|(id, o)| match o {
            ImportOutcome::Failed(err) => Some((id, err)),
            _ => None,
        })
    }
}

/// Row picked in the sidebar tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSelection {
    Category(Category),
    Subcategory(Category, &'static str),
}

/// View state owned by the display surface. Only `selection` narrows the
/// item list; `search` filters the category tree and `open` collapses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    pub selection: Option<SidebarSelection>,
    pub search: String,
    pub open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            selection: None,
            search: String::new(),
            open: true,
        }
    }
}

/// In-memory wardrobe: tagged items keyed by identifier, kept in first
/// import order.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<WardrobeItem>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &ItemId) -> Option<&WardrobeItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &WardrobeItem> {
        self.items.iter()
    }

    /// Stores `item`, replacing the tags of an existing entry in place.
    /// Returns the previous entry when there was one.
    pub fn insert(&mut self, item: WardrobeItem) -> Option<WardrobeItem> {
        match self.index.get(&item.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.items[pos], item)),
            None => {
                self.index.insert(item.id.clone(), self.items.len());
                self.items.push(item);
                None
            }
        }
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<WardrobeItem> {
        let pos = self.index.remove(id)?;
        let removed = self.items.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Checks that `id` resolves to an image and returns the presets for its
    /// tag prompt. Re-imports are preset with the current tags.
    pub fn prepare_import<R>(&self, id: &ItemId, resolver: &R) -> Result<TagDefaults, ImportError>
    where
        R: ContentResolver + ?Sized,
    {
        resolver.probe(id)?;
        Ok(TagDefaults::suggest(self.get(id).map(|item| &item.tags)))
    }

    /// Applies the tag prompt's answer for `id`.
    pub fn complete_import(&mut self, id: ItemId, response: TagResponse) -> ImportOutcome {
        let pairs = match response {
            TagResponse::Declined => {
                tracing::debug!("tagging declined for {id}");
                return ImportOutcome::Declined;
            }
            TagResponse::Accepted(pairs) => pairs,
        };
        let tags = match Tags::new(pairs) {
            Ok(tags) => tags,
            Err(source) => {
                tracing::warn!("rejecting tags for {id}: {source}");
                return ImportOutcome::Failed(ImportError::Tags { id, source });
            }
        };
        tracing::debug!("stored {id} as {} ({tags})", tags.primary());
        match self.insert(WardrobeItem::new(id, tags)) {
            Some(_) => ImportOutcome::Replaced,
            None => ImportOutcome::Imported,
        }
    }

    /// Imports each identifier: unreadable content is skipped without
    /// prompting, declined prompts store nothing, accepted tags overwrite any
    /// earlier entry for the same identifier.
    pub fn import_items<I, P, R>(&mut self, ids: I, prompt: &mut P, resolver: &R) -> ImportReport
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
        P: TagPrompt + ?Sized,
        R: ContentResolver + ?Sized,
    {
        let mut report = ImportReport::default();
        for id in ids {
            let id: ItemId = id.into();
            let outcome = match self.prepare_import(&id, resolver) {
                Ok(defaults) => {
                    let response = prompt.prompt(&id, &defaults);
                    self.complete_import(id.clone(), response)
                }
                Err(err) => {
                    tracing::warn!("skipping {id}: {err}");
                    ImportOutcome::Failed(err)
                }
            };
            report.entries.push((id, outcome));
        }
        report
    }

    /// Identifiers to show for a sidebar click, in catalog order.
    ///
    /// With `is_parent`, an item matches when its primary category equals
    /// `selected` or one of `selected`'s subcategory names; otherwise it must
    /// equal `selected` exactly. Unknown names simply match nothing.
    pub fn filter_by_category<'a>(
        &'a self,
        selected: &'a str,
        is_parent: bool,
    ) -> impl Iterator<Item = &'a ItemId> + 'a {
        let children: &'static [&'static str] = if is_parent {
            Category::from_label(selected)
                .map(Category::subcategories)
                .unwrap_or(&[])
        } else {
            &[]
        };
        self.items
            .iter()
            .filter(move |item| {
                let primary = item.primary_category.label();
                primary == selected || children.contains(&primary)
            })
            .map(|item| &item.id)
    }

    /// Items tagged with exactly `subcategory` under `category`.
    pub fn filter_by_tag<'a>(
        &'a self,
        category: Category,
        subcategory: &'a str,
    ) -> impl Iterator<Item = &'a ItemId> + 'a {
        self.items
            .iter()
            .filter(move |item| item.tags.get(category) == Some(subcategory))
            .map(|item| &item.id)
    }

    /// Items carrying any tag for `category`: the candidates offered for the
    /// outfit slot of that category.
    pub fn items_in(&self, category: Category) -> impl Iterator<Item = &WardrobeItem> {
        self.items
            .iter()
            .filter(move |item| item.tags.contains(category))
    }

    /// Identifiers the item list should display for `state`'s selection.
    pub fn visible<'a>(&'a self, state: &SidebarState) -> Vec<&'a ItemId> {
        match state.selection {
            None => self.items.iter().map(|item| &item.id).collect(),
            Some(SidebarSelection::Category(category)) => {
                self.filter_by_category(category.label(), true).collect()
            }
            Some(SidebarSelection::Subcategory(category, sub)) => {
                self.filter_by_tag(category, sub).collect()
            }
        }
    }
}
