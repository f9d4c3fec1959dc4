//! Modal tag prompt shown once per imported image.

use super::UiApp;
use eframe::egui;
use wardrobe_core::{ItemId, TagDefaults, TagResponse};

const PREVIEW_SIZE: f32 = 180.0;

pub struct TagDialog {
    pub id: ItemId,
    pub draft: TagDefaults,
}

impl TagDialog {
    pub fn new(id: ItemId, draft: TagDefaults) -> Self {
        Self { id, draft }
    }

    /// Register is only possible with at least one category enabled.
    pub fn can_register(&self) -> bool {
        self.draft.choices.iter().any(|c| c.enabled)
    }
}

impl UiApp {
    /// Draws the pending tag dialog and applies the answer once given.
    pub(super) fn render_tag_dialog(&mut self, ctx: &egui::Context) {
        let Some(mut dialog) = self.tag_dialog.take() else {
            return;
        };
        let mut response = None;
        let title = self.tr("이미지 태그 등록", "Tag image");
        let register = self.tr("등록", "Register");
        let cancel = self.tr("취소", "Cancel");
        let preview = self.outfit_thumbs.get_or_load(ctx, &dialog.id).map(|tex| {
            let size = tex.size_vec2();
            let scale = (PREVIEW_SIZE / size.x.max(size.y)).min(1.0);
            (tex.id(), size * scale)
        });

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(dialog.id.to_string());
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    match preview {
                        Some(sized) => {
                            ui.image(sized);
                        }
                        None => {
                            ui.allocate_space(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE));
                        }
                    }
                    egui::Grid::new("tag-grid")
                        .num_columns(2)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            for choice in &mut dialog.draft.choices {
                                ui.checkbox(&mut choice.enabled, choice.category.label());
                                ui.add_enabled_ui(choice.enabled, |ui| {
                                    egui::ComboBox::from_id_salt(("tag-combo", choice.category))
                                        .selected_text(choice.subcategory)
                                        .show_ui(ui, |ui| {
                                            for sub in choice.category.subcategories() {
                                                ui.selectable_value(
                                                    &mut choice.subcategory,
                                                    *sub,
                                                    *sub,
                                                );
                                            }
                                        });
                                });
                                ui.end_row();
                            }
                        });
                });
                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let can_register = dialog.can_register();
                    if ui
                        .add_enabled(can_register, egui::Button::new(register))
                        .clicked()
                    {
                        response = Some(TagResponse::Accepted(dialog.draft.selection()));
                    }
                    if ui.button(cancel).clicked() {
                        response = Some(TagResponse::Declined);
                    }
                });
            });

        match response {
            Some(answer) => {
                let outcome = self.catalog.complete_import(dialog.id.clone(), answer);
                self.thumbs.forget(&dialog.id);
                self.batch.entries.push((dialog.id, outcome));
                self.advance_imports();
            }
            None => self.tag_dialog = Some(dialog),
        }
    }
}
