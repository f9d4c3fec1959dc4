//! Theme palettes keyed by enum, never by widget text.

use eframe::egui::{self, Color32};
use serde::{Deserialize, Serialize};
use wardrobe_core::OutfitSlot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Blue,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub card: Color32,
    pub text: Color32,
    pub purple: Color32,
    pub blue: Color32,
    pub yellow: Color32,
}

const DARK: Palette = Palette {
    background: Color32::from_rgb(0x23, 0x23, 0x4f),
    card: Color32::from_rgb(0x28, 0x2a, 0x36),
    text: Color32::from_rgb(0xf4, 0xf4, 0xf4),
    purple: Color32::from_rgb(0x7c, 0x5c, 0xff),
    blue: Color32::from_rgb(0x4f, 0x8c, 0xff),
    yellow: Color32::from_rgb(0xff, 0xe0, 0x66),
};

const LIGHT: Palette = Palette {
    background: Color32::from_rgb(0xf2, 0xf2, 0xf8),
    card: Color32::from_rgb(0xff, 0xff, 0xff),
    text: Color32::from_rgb(0x22, 0x22, 0x2e),
    purple: Color32::from_rgb(0x6a, 0x4a, 0xe8),
    blue: Color32::from_rgb(0x2f, 0x6c, 0xdf),
    yellow: Color32::from_rgb(0xd9, 0xa4, 0x00),
};

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn apply(self, ctx: &egui::Context) {
        let palette = self.palette();
        let mut visuals = match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        visuals.panel_fill = palette.card;
        visuals.window_fill = palette.card;
        visuals.extreme_bg_color = palette.background;
        visuals.selection.bg_fill = palette.purple;
        visuals.override_text_color = Some(palette.text);
        ctx.set_visuals(visuals);
    }
}

impl Palette {
    pub fn accent(&self, accent: Accent) -> Color32 {
        match accent {
            Accent::Purple => self.purple,
            Accent::Blue => self.blue,
            Accent::Yellow => self.yellow,
        }
    }
}

/// Border colour of each outfit slot frame.
pub fn slot_accent(slot: OutfitSlot) -> Accent {
    match slot {
        OutfitSlot::Top | OutfitSlot::Outer => Accent::Purple,
        OutfitSlot::Bottom | OutfitSlot::Accessory => Accent::Blue,
        OutfitSlot::Shoes => Accent::Yellow,
    }
}
