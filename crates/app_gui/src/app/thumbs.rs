//! Small LRU of decoded textures.

use eframe::egui;
use std::collections::{HashMap, VecDeque};
use wardrobe_core::ItemId;

const MAX_THUMBS: usize = 256;

pub struct ThumbCache {
    size: u32,
    capacity: usize,
    thumbs: HashMap<ItemId, egui::TextureHandle>,
    /// Least recently used first.
    keys: VecDeque<ItemId>,
}

impl ThumbCache {
    pub fn new(size: u32) -> Self {
        Self::with_capacity(size, MAX_THUMBS)
    }

    fn with_capacity(size: u32, capacity: usize) -> Self {
        Self {
            size,
            capacity,
            thumbs: HashMap::new(),
            keys: VecDeque::new(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Changing the edge length drops every cached texture.
    pub fn set_size(&mut self, size: u32) {
        if size != self.size {
            self.size = size;
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.thumbs.clear();
        self.keys.clear();
    }

    pub fn forget(&mut self, id: &ItemId) {
        self.thumbs.remove(id);
        self.keys.retain(|k| k != id);
    }

    pub fn get_or_load(
        &mut self,
        ctx: &egui::Context,
        id: &ItemId,
    ) -> Option<&egui::TextureHandle> {
        if self.thumbs.contains_key(id) {
            self.touch(id);
        } else {
            let img = match image::open(id.as_path()) {
                Ok(img) => img,
                Err(e) => {
                    tracing::warn!("Failed to load thumbnail for {id}: {e}");
                    return None;
                }
            };
            let thumb = image::imageops::thumbnail(&img, self.size, self.size);
            let (w, h) = thumb.dimensions();
            let size = [w as usize, h as usize];
            let pixels = thumb.into_raw();
            let color = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
            let name = format!("thumb{}:{id}", self.size);
            let tex = ctx.load_texture(name, color, egui::TextureOptions::LINEAR);
            self.thumbs.insert(id.clone(), tex);
            self.keys.push_back(id.clone());
            while self.thumbs.len() > self.capacity
                && let Some(old) = self.keys.pop_front()
            {
                self.thumbs.remove(&old);
            }
        }
        self.thumbs.get(id)
    }

    fn touch(&mut self, id: &ItemId) {
        if let Some(pos) = self.keys.iter().position(|k| k == id)
            && let Some(key) = self.keys.remove(pos)
        {
            self.keys.push_back(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn recently_shown_thumbnail_survives_eviction() -> Result<()> {
        let dir = tempdir()?;
        let mut ids = Vec::new();
        for name in ["a.png", "b.png", "c.png"] {
            let path = dir.path().join(name);
            RgbImage::from_pixel(8, 8, Rgb([9, 9, 9])).save(&path)?;
            ids.push(ItemId::from(path));
        }
        let ctx = egui::Context::default();
        let mut cache = ThumbCache::with_capacity(4, 2);

        assert!(cache.get_or_load(&ctx, &ids[0]).is_some());
        assert!(cache.get_or_load(&ctx, &ids[1]).is_some());
        assert!(cache.get_or_load(&ctx, &ids[0]).is_some());
        assert!(cache.get_or_load(&ctx, &ids[2]).is_some());

        assert!(cache.thumbs.contains_key(&ids[0]));
        assert!(!cache.thumbs.contains_key(&ids[1]));
        assert_eq!(cache.keys, [ids[0].clone(), ids[2].clone()]);
        Ok(())
    }

    #[test]
    fn unreadable_file_is_not_cached() {
        let ctx = egui::Context::default();
        let mut cache = ThumbCache::new(4);
        assert!(cache.get_or_load(&ctx, &ItemId::from("/no/such/file.png")).is_none());
        assert!(cache.keys.is_empty());
    }
}
