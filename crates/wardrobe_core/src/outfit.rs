use crate::content::ContentResolver;
use crate::item::ItemId;
use crate::taxonomy::Category;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Fixed display position of a garment in a composed outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OutfitSlot {
    Top,
    Bottom,
    Outer,
    Shoes,
    Accessory,
}

impl OutfitSlot {
    pub const ALL: [OutfitSlot; 5] = [
        OutfitSlot::Top,
        OutfitSlot::Bottom,
        OutfitSlot::Outer,
        OutfitSlot::Shoes,
        OutfitSlot::Accessory,
    ];

    pub fn category(self) -> Category {
        match self {
            OutfitSlot::Top => Category::Top,
            OutfitSlot::Bottom => Category::Bottom,
            OutfitSlot::Outer => Category::Outer,
            OutfitSlot::Shoes => Category::Shoes,
            OutfitSlot::Accessory => Category::Accessory,
        }
    }

    pub fn for_category(category: Category) -> OutfitSlot {
        match category {
            Category::Top => OutfitSlot::Top,
            Category::Bottom => OutfitSlot::Bottom,
            Category::Outer => OutfitSlot::Outer,
            Category::Shoes => OutfitSlot::Shoes,
            Category::Accessory => OutfitSlot::Accessory,
        }
    }

    pub fn label(self) -> &'static str {
        self.category().label()
    }

    /// Top and bottom anchor every outfit.
    pub fn is_mandatory(self) -> bool {
        matches!(self, OutfitSlot::Top | OutfitSlot::Bottom)
    }
}

/// Candidate outfit: one optional identifier per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitSelection {
    pub top: Option<ItemId>,
    pub bottom: Option<ItemId>,
    pub outer: Option<ItemId>,
    pub shoes: Option<ItemId>,
    pub accessory: Option<ItemId>,
}

impl OutfitSelection {
    pub fn new(top: impl Into<ItemId>, bottom: impl Into<ItemId>) -> Self {
        Self {
            top: Some(top.into()),
            bottom: Some(bottom.into()),
            ..Self::default()
        }
    }

    pub fn with(mut self, slot: OutfitSlot, id: impl Into<ItemId>) -> Self {
        *self.slot_mut(slot) = Some(id.into());
        self
    }

    pub fn get(&self, slot: OutfitSlot) -> Option<&ItemId> {
        match slot {
            OutfitSlot::Top => self.top.as_ref(),
            OutfitSlot::Bottom => self.bottom.as_ref(),
            OutfitSlot::Outer => self.outer.as_ref(),
            OutfitSlot::Shoes => self.shoes.as_ref(),
            OutfitSlot::Accessory => self.accessory.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: OutfitSlot) -> &mut Option<ItemId> {
        match slot {
            OutfitSlot::Top => &mut self.top,
            OutfitSlot::Bottom => &mut self.bottom,
            OutfitSlot::Outer => &mut self.outer,
            OutfitSlot::Shoes => &mut self.shoes,
            OutfitSlot::Accessory => &mut self.accessory,
        }
    }
}

/// Displayable outfit, in slot order. Always starts with top and bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedOutfit {
    pieces: Vec<(OutfitSlot, ItemId)>,
}

impl ComposedOutfit {
    pub fn pieces(&self) -> &[(OutfitSlot, ItemId)] {
        &self.pieces
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.pieces.iter().map(|(_, id)| id)
    }

    pub fn slot(&self, slot: OutfitSlot) -> Option<&ItemId> {
        self.pieces
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, id)| id)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

/// Turns a candidate outfit into the sequence to display.
///
/// Returns `None` unless both top and bottom are present and readable.
/// Optional slots that are absent or unreadable are dropped silently.
pub fn compose<R>(selection: &OutfitSelection, resolver: &R) -> Option<ComposedOutfit>
where
    R: ContentResolver + ?Sized,
{
    let mut pieces = Vec::with_capacity(OutfitSlot::ALL.len());
    for slot in OutfitSlot::ALL {
        let Some(id) = selection.get(slot) else {
            if slot.is_mandatory() {
                return None;
            }
            continue;
        };
        match resolver.probe(id) {
            Ok(_) => pieces.push((slot, id.clone())),
            Err(err) if slot.is_mandatory() => {
                tracing::debug!("not composing outfit, {} unusable: {err}", slot.label());
                return None;
            }
            Err(err) => {
                tracing::warn!("dropping {} from outfit: {err}", slot.label());
            }
        }
    }
    Some(ComposedOutfit { pieces })
}

/// File names the recommend action looks for in the samples directory.
pub const SAMPLE_TOP: &str = "sample_top.jpg";
pub const SAMPLE_BOTTOM: &str = "sample_bottom.jpg";
pub const SAMPLE_SHOES: &str = "sample_shoes.jpg";

/// Fixed demonstration outfit used until a recommender exists.
pub fn sample_outfit(dir: impl AsRef<Path>) -> OutfitSelection {
    let dir = dir.as_ref();
    OutfitSelection::new(dir.join(SAMPLE_TOP), dir.join(SAMPLE_BOTTOM))
        .with(OutfitSlot::Shoes, dir.join(SAMPLE_SHOES))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Situation {
    Work,
    Date,
    Exercise,
    #[default]
    Daily,
    Party,
}

impl Situation {
    pub const ALL: [Situation; 5] = [
        Situation::Work,
        Situation::Date,
        Situation::Exercise,
        Situation::Daily,
        Situation::Party,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    Clear,
    Cloudy,
    Rain,
    Snow,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Clear, Weather::Cloudy, Weather::Rain, Weather::Snow];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StylePreference {
    #[default]
    Casual,
    Formal,
    Sporty,
    Vintage,
}

impl StylePreference {
    pub const ALL: [StylePreference; 4] = [
        StylePreference::Casual,
        StylePreference::Formal,
        StylePreference::Sporty,
        StylePreference::Vintage,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    ColorHarmony,
    StyleConsistency,
}

pub const MIN_TEMPERATURE_C: i32 = -30;
pub const MAX_TEMPERATURE_C: i32 = 50;

/// Preferences gathered by the recommendation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub situation: Situation,
    pub weather: Weather,
    #[serde(deserialize_with = "clamped_temperature")]
    temperature_c: i32,
    pub liked_colors: String,
    pub avoided_colors: String,
    pub style: StylePreference,
    pub priority: Priority,
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            situation: Situation::default(),
            weather: Weather::default(),
            temperature_c: 20,
            liked_colors: String::new(),
            avoided_colors: String::new(),
            style: StylePreference::default(),
            priority: Priority::default(),
        }
    }
}

impl RecommendationRequest {
    pub fn temperature_c(&self) -> i32 {
        self.temperature_c
    }

    pub fn set_temperature_c(&mut self, value: i32) {
        self.temperature_c = value.clamp(MIN_TEMPERATURE_C, MAX_TEMPERATURE_C);
    }
}

fn clamped_temperature<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i32::deserialize(deserializer)?;
    Ok(value.clamp(MIN_TEMPERATURE_C, MAX_TEMPERATURE_C))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FsImageResolver;
    use crate::content::tests::write_png;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn top_and_bottom_only() -> Result<()> {
        let dir = tempdir()?;
        let top = write_png(dir.path(), "t.png", 2, 2)?;
        let bottom = write_png(dir.path(), "b.png", 2, 2)?;
        let outfit = compose(&OutfitSelection::new(top.clone(), bottom.clone()), &FsImageResolver)
            .expect("anchors present");
        let ids: Vec<_> = outfit.ids().cloned().collect();
        assert_eq!(ids, vec![ItemId::from(top), ItemId::from(bottom)]);
        Ok(())
    }

    #[test]
    fn missing_anchor_yields_nothing() -> Result<()> {
        let dir = tempdir()?;
        let bottom = write_png(dir.path(), "b.png", 2, 2)?;
        let no_top = OutfitSelection {
            bottom: Some(ItemId::from(bottom.clone())),
            ..OutfitSelection::default()
        };
        assert_eq!(compose(&no_top, &FsImageResolver), None);

        let unreadable_top = OutfitSelection::new(dir.path().join("gone.png"), bottom);
        assert_eq!(compose(&unreadable_top, &FsImageResolver), None);
        Ok(())
    }

    #[test]
    fn unreadable_optional_slot_is_dropped() -> Result<()> {
        let dir = tempdir()?;
        let top = write_png(dir.path(), "t.png", 2, 2)?;
        let bottom = write_png(dir.path(), "b.png", 2, 2)?;
        let hat = write_png(dir.path(), "hat.png", 2, 2)?;
        let selection = OutfitSelection::new(top, bottom)
            .with(OutfitSlot::Shoes, dir.path().join("missing.jpg"))
            .with(OutfitSlot::Accessory, hat.clone());
        let outfit = compose(&selection, &FsImageResolver).expect("anchors present");
        let slots: Vec<_> = outfit.pieces().iter().map(|(s, _)| *s).collect();
        assert_eq!(
            slots,
            vec![OutfitSlot::Top, OutfitSlot::Bottom, OutfitSlot::Accessory]
        );
        assert_eq!(outfit.slot(OutfitSlot::Accessory), Some(&ItemId::from(hat)));
        assert_eq!(outfit.slot(OutfitSlot::Shoes), None);
        Ok(())
    }

    #[test]
    fn compose_is_idempotent_and_ordered() -> Result<()> {
        let dir = tempdir()?;
        let mut selection = OutfitSelection::default();
        for slot in OutfitSlot::ALL.into_iter().rev() {
            let path = write_png(dir.path(), &format!("{slot:?}.png"), 1, 1)?;
            selection = selection.with(slot, path);
        }
        let first = compose(&selection, &FsImageResolver);
        let second = compose(&selection, &FsImageResolver);
        assert_eq!(first, second);
        let slots: Vec<_> = first
            .expect("all present")
            .pieces()
            .iter()
            .map(|(s, _)| *s)
            .collect();
        assert_eq!(slots, OutfitSlot::ALL);
        Ok(())
    }

    #[test]
    fn sample_outfit_points_into_directory() {
        let selection = sample_outfit("/samples");
        assert_eq!(
            selection.get(OutfitSlot::Top).map(ItemId::as_path),
            Some(Path::new("/samples/sample_top.jpg"))
        );
        assert_eq!(selection.get(OutfitSlot::Outer), None);
        assert!(selection.get(OutfitSlot::Shoes).is_some());
    }

    #[test]
    fn slots_map_one_to_one_onto_categories() {
        for slot in OutfitSlot::ALL {
            assert_eq!(OutfitSlot::for_category(slot.category()), slot);
        }
        assert!(OutfitSlot::Top.is_mandatory() && OutfitSlot::Bottom.is_mandatory());
        assert!(!OutfitSlot::Shoes.is_mandatory());
    }

    #[test]
    fn temperature_is_clamped() {
        let mut request = RecommendationRequest::default();
        assert_eq!(request.temperature_c(), 20);
        request.set_temperature_c(80);
        assert_eq!(request.temperature_c(), MAX_TEMPERATURE_C);
        request.set_temperature_c(-100);
        assert_eq!(request.temperature_c(), MIN_TEMPERATURE_C);
    }

    #[test]
    fn deserialized_temperature_is_clamped() -> Result<()> {
        let mut json = serde_json::to_value(RecommendationRequest::default())?;
        json["temperature_c"] = serde_json::json!(999);
        let request: RecommendationRequest = serde_json::from_value(json.clone())?;
        assert_eq!(request.temperature_c(), MAX_TEMPERATURE_C);

        json["temperature_c"] = serde_json::json!(-273);
        let request: RecommendationRequest = serde_json::from_value(json)?;
        assert_eq!(request.temperature_c(), MIN_TEMPERATURE_C);
        Ok(())
    }
}
