//! Wardrobe catalog and outfit composition.
//!
//! Everything here is UI-free: the desktop app supplies file paths, tag
//! answers and view state, and renders whatever these functions return.

pub mod catalog;
pub mod content;
pub mod error;
pub mod item;
pub mod outfit;
pub mod scan;
pub mod taxonomy;

pub use catalog::{
    Catalog, ImportOutcome, ImportReport, SidebarSelection, SidebarState, TagPrompt, TagResponse,
};
pub use content::{ContentResolver, FsImageResolver, ImageMeta};
pub use error::{ContentError, ImportError, TagError};
pub use item::{ItemId, TagChoice, TagDefaults, Tags, WardrobeItem};
pub use outfit::{
    ComposedOutfit, OutfitSelection, OutfitSlot, Priority, RecommendationRequest, Situation,
    StylePreference, Weather, compose, sample_outfit,
};
pub use scan::{ScanOptions, collect_image_files, expand_dropped, is_supported_image};
pub use taxonomy::{Category, TaxonomyMatch, parent_of, search_taxonomy};
