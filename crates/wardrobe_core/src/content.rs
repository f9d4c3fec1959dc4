use crate::error::ContentError;
use crate::item::ItemId;
use image::ImageReader;
use std::io::ErrorKind;

/// What a resolver learned about readable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMeta {
    pub width: u32,
    pub height: u32,
}

/// Maps item identifiers to image content.
///
/// The catalog and the outfit composer only ask whether content is there and
/// decodable; loading pixels for display is left to the caller.
pub trait ContentResolver {
    fn probe(&self, id: &ItemId) -> Result<ImageMeta, ContentError>;

    fn is_readable(&self, id: &ItemId) -> bool {
        self.probe(id).is_ok()
    }
}

impl<R: ContentResolver + ?Sized> ContentResolver for &R {
    fn probe(&self, id: &ItemId) -> Result<ImageMeta, ContentError> {
        (**self).probe(id)
    }
}

/// Treats identifiers as filesystem paths and checks that they decode as an
/// image. The format is guessed from content and the whole file is decoded,
/// so truncated or corrupt pixel data is rejected, not only bad headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageResolver;

impl ContentResolver for FsImageResolver {
    fn probe(&self, id: &ItemId) -> Result<ImageMeta, ContentError> {
        let path = id.as_path();
        let reader = ImageReader::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ContentError::Missing(id.clone()),
            _ => ContentError::Io {
                id: id.clone(),
                source,
            },
        })?;
        let reader = reader
            .with_guessed_format()
            .map_err(|source| ContentError::Io {
                id: id.clone(),
                source,
            })?;
        let decoded = reader.decode().map_err(|source| ContentError::Decode {
            id: id.clone(),
            source,
        })?;
        Ok(ImageMeta {
            width: decoded.width(),
            height: decoded.height(),
        })
    }
}
