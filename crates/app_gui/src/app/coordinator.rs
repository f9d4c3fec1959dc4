//! Coordinator tab: wardrobe sidebar, outfit column and preference panel.

use super::UiApp;
use super::style::slot_accent;
use eframe::egui;
use rfd::FileDialog;
use wardrobe_core::scan::IMAGE_EXTENSIONS;
use wardrobe_core::{
    ItemId, OutfitSlot, Priority, SidebarSelection, Situation, StylePreference, Weather, compose,
    sample_outfit, search_taxonomy,
};

const SLOT_FRAME: f32 = 220.0;
/// Slots drawn even when empty, as placeholders.
const ANCHOR_SLOTS: [OutfitSlot; 3] = [OutfitSlot::Top, OutfitSlot::Bottom, OutfitSlot::Shoes];

impl UiApp {
    pub(super) fn render_coordinator(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("wardrobe")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.render_wardrobe(ctx, ui));

        egui::SidePanel::right("preferences")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| self.render_preferences(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.render_outfit(ctx, ui));
    }

    fn render_wardrobe(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let arrow = if self.sidebar.open { "⮜" } else { "⮞" };
            if ui.button(arrow).clicked() {
                self.sidebar.open = !self.sidebar.open;
                self.settings.sidebar_open = self.sidebar.open;
                self.persist_settings();
            }
            if ui
                .button(self.tr("이미지 업로드", "Upload images"))
                .clicked()
                && let Some(files) = FileDialog::new()
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .pick_files()
            {
                self.enqueue_imports(files);
            }
        });
        ui.add_space(6.0);

        ui.horizontal_top(|ui| {
            if self.sidebar.open {
                ui.vertical(|ui| {
                    ui.set_width(140.0);
                    self.render_category_tree(ui);
                });
                ui.separator();
            }
            ui.vertical(|ui| self.render_item_grid(ctx, ui));
        });
    }

    fn render_category_tree(&mut self, ui: &mut egui::Ui) {
        let hint = self.tr("검색", "Search");
        ui.add(egui::TextEdit::singleline(&mut self.sidebar.search).hint_text(hint));
        ui.add_space(4.0);
        if ui
            .selectable_label(self.sidebar.selection.is_none(), self.tr("전체", "All"))
            .clicked()
        {
            self.sidebar.selection = None;
        }
        egui::ScrollArea::vertical()
            .id_salt("category-tree")
            .show(ui, |ui| {
                for found in search_taxonomy(&self.sidebar.search) {
                    let category = found.category;
                    let picked = SidebarSelection::Category(category);
                    let label = egui::RichText::new(category.label()).strong();
                    if ui
                        .selectable_label(self.sidebar.selection == Some(picked), label)
                        .clicked()
                    {
                        self.sidebar.selection = Some(picked);
                    }
                    ui.indent(("subs", category), |ui| {
                        for sub in found.subcategories {
                            let picked = SidebarSelection::Subcategory(category, sub);
                            if ui
                                .selectable_label(self.sidebar.selection == Some(picked), sub)
                                .clicked()
                            {
                                self.sidebar.selection = Some(picked);
                            }
                        }
                    });
                }
            });
    }

    fn render_item_grid(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let visible: Vec<ItemId> = self
            .catalog
            .visible(&self.sidebar)
            .into_iter()
            .cloned()
            .collect();
        if visible.is_empty() {
            ui.label(self.tr(
                "이미지를 업로드하거나 여기로 끌어다 놓으세요.",
                "Upload images or drop them here.",
            ));
            return;
        }

        let edge = self.thumbs.size() as f32;
        let desired = egui::Vec2::splat(edge);
        let mut picked = None;
        let mut removed = None;
        egui::ScrollArea::vertical()
            .id_salt("item-grid")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for id in &visible {
                        let (resp, painter) = ui.allocate_painter(desired, egui::Sense::click());
                        let r = resp.rect;
                        if let Some(tex) = self.thumbs.get_or_load(ctx, id) {
                            let uv = egui::Rect::from_min_max(
                                egui::pos2(0.0, 0.0),
                                egui::pos2(1.0, 1.0),
                            );
                            painter.image(tex.id(), r, uv, egui::Color32::WHITE);
                        } else {
                            painter.rect_filled(r, 4.0, egui::Color32::from_gray(40));
                            painter.rect_stroke(
                                r,
                                4.0,
                                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                                egui::StrokeKind::Inside,
                            );
                        }
                        let tags = self
                            .catalog
                            .get(id)
                            .map(|item| item.tags.to_string())
                            .unwrap_or_default();
                        let resp = resp.on_hover_text(format!("{id}\n{tags}"));
                        if resp.clicked() {
                            picked = Some(id.clone());
                        }
                        resp.context_menu(|ui| {
                            if ui.button(self.tr("옷장에서 제거", "Remove")).clicked() {
                                removed = Some(id.clone());
                            }
                        });
                    }
                });
            });

        if let Some(id) = picked {
            self.wear(id);
        }
        if let Some(id) = removed {
            self.catalog.remove(&id);
            self.thumbs.forget(&id);
        }
    }

    /// Puts an item into the outfit slot of its primary category.
    fn wear(&mut self, id: ItemId) {
        let Some(item) = self.catalog.get(&id) else {
            return;
        };
        let slot = OutfitSlot::for_category(item.primary_category);
        self.wear_in(slot, id);
    }

    /// Puts an item into `slot`. The outfit on screen only changes when the
    /// new selection composes; otherwise the status line explains why.
    fn wear_in(&mut self, slot: OutfitSlot, id: ItemId) {
        self.selection = std::mem::take(&mut self.selection).with(slot, id);
        match compose(&self.selection, &self.resolver) {
            Some(outfit) => self.outfit = Some(outfit),
            None => {
                self.status = self
                    .tr(
                        "상의와 하의를 모두 선택하면 코디가 표시됩니다.",
                        "Pick both a top and a bottom to see the outfit.",
                    )
                    .to_string();
            }
        }
    }

    /// Catalog items that can fill `slot`, in catalog order.
    fn slot_choices(&self, slot: OutfitSlot) -> Vec<ItemId> {
        self.catalog
            .items_in(slot.category())
            .map(|item| item.id.clone())
            .collect()
    }

    fn render_slot_pickers(&mut self, ui: &mut egui::Ui) {
        let mut chosen = None;
        ui.horizontal_wrapped(|ui| {
            for slot in OutfitSlot::ALL {
                let choices = self.slot_choices(slot);
                let current = self.selection.get(slot).cloned();
                let shown = current
                    .as_ref()
                    .map(short_name)
                    .unwrap_or_else(|| slot.label().to_string());
                ui.add_enabled_ui(!choices.is_empty(), |ui| {
                    egui::ComboBox::from_id_salt(("slot-pick", slot))
                        .selected_text(shown)
                        .show_ui(ui, |ui| {
                            for id in choices {
                                let on = current.as_ref() == Some(&id);
                                if ui.selectable_label(on, short_name(&id)).clicked() {
                                    chosen = Some((slot, id));
                                }
                            }
                        });
                });
            }
        });
        if let Some((slot, id)) = chosen {
            self.wear_in(slot, id);
        }
    }

    fn recommend(&mut self) {
        tracing::info!(request = ?self.request, "recommendation requested");
        let dir = self.settings.samples_dir();
        self.selection = sample_outfit(&dir);
        self.outfit = compose(&self.selection, &self.resolver);
        if self.outfit.is_none() {
            self.status = format!(
                "{}: {}",
                self.tr("샘플 이미지를 찾을 수 없습니다", "Sample images not found"),
                dir.display()
            );
        }
    }

    fn render_outfit(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let palette = *self.settings.theme.palette();
        ui.vertical_centered(|ui| {
            ui.heading(self.tr("추천 코디", "Recommended outfit"));
            ui.add_space(8.0);
            self.render_slot_pickers(ui);
            ui.add_space(12.0);
            egui::ScrollArea::vertical()
                .id_salt("outfit")
                .show(ui, |ui| {
                    let slots: Vec<(OutfitSlot, Option<ItemId>)> = match &self.outfit {
                        Some(outfit) => outfit
                            .pieces()
                            .iter()
                            .map(|(slot, id)| (*slot, Some(id.clone())))
                            .collect(),
                        None => ANCHOR_SLOTS.iter().map(|slot| (*slot, None)).collect(),
                    };
                    for (slot, id) in slots {
                        let accent = palette.accent(slot_accent(slot));
                        egui::Frame::new()
                            .fill(palette.background)
                            .stroke(egui::Stroke::new(2.0, accent))
                            .corner_radius(16.0)
                            .inner_margin(egui::Margin::same(10))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::Vec2::splat(SLOT_FRAME - 20.0));
                                let texture = id
                                    .as_ref()
                                    .and_then(|id| self.outfit_thumbs.get_or_load(ctx, id))
                                    .map(|tex| (tex.id(), tex.size_vec2()));
                                ui.centered_and_justified(|ui| match texture {
                                    Some(sized) => {
                                        ui.image(sized);
                                    }
                                    None => {
                                        ui.label(egui::RichText::new(slot.label()).size(18.0));
                                    }
                                });
                            });
                        ui.add_space(16.0);
                    }
                });
        });
    }

    fn render_preferences(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.group(|ui| {
            ui.strong(self.tr("상황", "Situation"));
            egui::ComboBox::from_id_salt("situation")
                .selected_text(self.situation_label(self.request.situation))
                .show_ui(ui, |ui| {
                    for s in Situation::ALL {
                        let label = self.situation_label(s);
                        ui.selectable_value(&mut self.request.situation, s, label);
                    }
                });
        });
        ui.group(|ui| {
            ui.strong(self.tr("날씨", "Weather"));
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_salt("weather")
                    .selected_text(self.weather_label(self.request.weather))
                    .show_ui(ui, |ui| {
                        for w in Weather::ALL {
                            let label = self.weather_label(w);
                            ui.selectable_value(&mut self.request.weather, w, label);
                        }
                    });
                ui.label(self.tr("온도:", "Temp:"));
                let mut temp = self.request.temperature_c();
                if ui
                    .add(egui::DragValue::new(&mut temp).range(-30..=50).suffix("°C"))
                    .changed()
                {
                    self.request.set_temperature_c(temp);
                }
            });
        });
        ui.group(|ui| {
            ui.strong(self.tr("색상 선호도", "Colour preference"));
            egui::Grid::new("colors").num_columns(2).show(ui, |ui| {
                ui.label(self.tr("좋아하는 색:", "Liked:"));
                ui.text_edit_singleline(&mut self.request.liked_colors);
                ui.end_row();
                ui.label(self.tr("피하는 색:", "Avoided:"));
                ui.text_edit_singleline(&mut self.request.avoided_colors);
                ui.end_row();
            });
        });
        ui.group(|ui| {
            ui.strong(self.tr("스타일 선택", "Style"));
            egui::ComboBox::from_id_salt("style")
                .selected_text(self.style_label(self.request.style))
                .show_ui(ui, |ui| {
                    for s in StylePreference::ALL {
                        let label = self.style_label(s);
                        ui.selectable_value(&mut self.request.style, s, label);
                    }
                });
        });
        ui.group(|ui| {
            ui.strong(self.tr("추천 우선순위", "Priority"));
            let color = self.tr("색상 조합", "Colour harmony");
            let style = self.tr("스타일 일관성", "Style consistency");
            ui.radio_value(&mut self.request.priority, Priority::ColorHarmony, color);
            ui.radio_value(&mut self.request.priority, Priority::StyleConsistency, style);
        });
        ui.add_space(12.0);
        let button = egui::Button::new(
            egui::RichText::new(self.tr("코디 추천", "Recommend"))
                .strong()
                .size(17.0),
        )
        .min_size(egui::vec2(ui.available_width(), 40.0));
        if ui.add(button).clicked() {
            self.recommend();
        }
    }

    fn situation_label(&self, s: Situation) -> &'static str {
        match s {
            Situation::Work => self.tr("업무", "Work"),
            Situation::Date => self.tr("데이트", "Date"),
            Situation::Exercise => self.tr("운동", "Exercise"),
            Situation::Daily => self.tr("일상", "Everyday"),
            Situation::Party => self.tr("파티", "Party"),
        }
    }

    fn weather_label(&self, w: Weather) -> &'static str {
        match w {
            Weather::Clear => self.tr("맑음", "Clear"),
            Weather::Cloudy => self.tr("흐림", "Cloudy"),
            Weather::Rain => self.tr("비", "Rain"),
            Weather::Snow => self.tr("눈", "Snow"),
        }
    }

    fn style_label(&self, s: StylePreference) -> &'static str {
        match s {
            StylePreference::Casual => self.tr("캐주얼", "Casual"),
            StylePreference::Formal => self.tr("포멀", "Formal"),
            StylePreference::Sporty => self.tr("스포티", "Sporty"),
            StylePreference::Vintage => self.tr("빈티지", "Vintage"),
        }
    }
}

/// File name of an item for compact labels.
fn short_name(id: &ItemId) -> String {
    match id.as_path().file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => id.to_string(),
    }
}
