use crate::item::ItemId;
use thiserror::Error;

/// Why an identifier could not be resolved to displayable image content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content not found: {0}")]
    Missing(ItemId),
    #[error("cannot read {id}: {source}")]
    Io {
        id: ItemId,
        #[source]
        source: std::io::Error,
    },
    #[error("not a decodable image: {id}: {source}")]
    Decode {
        id: ItemId,
        #[source]
        source: image::ImageError,
    },
}

/// Rejected tag selections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("at least one category must be tagged")]
    Empty,
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("{subcategory} is not a subcategory of {category}")]
    UnknownSubcategory {
        category: String,
        subcategory: String,
    },
    #[error("category tagged twice: {0}")]
    DuplicateCategory(String),
}

/// Per-item import failure. Never fatal for the batch.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("invalid tags for {id}: {source}")]
    Tags {
        id: ItemId,
        #[source]
        source: TagError,
    },
}
