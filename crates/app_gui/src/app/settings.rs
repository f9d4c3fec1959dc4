//! Settings panel rendering for language, theme, thumbnails and samples.

use super::UiApp;
use super::style::Theme;
use crate::config::{MAX_THUMB_SIZE, MIN_THUMB_SIZE, clamp_thumb_size};
use crate::i18n::{Language, LanguagePreference};
use eframe::egui;
use rfd::FileDialog;

impl UiApp {
    /// Renders the settings screen; every change is saved immediately.
    pub(super) fn render_settings_panel(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.heading(self.tr("설정", "Settings"));
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(self.tr("언어", "Language"));
            let mut selected = self.settings.language;
            let option_label = |lang: LanguagePreference| match (self.language, lang) {
                (Language::Korean, LanguagePreference::System) => "시스템 (자동)",
                (Language::English, LanguagePreference::System) => "System (auto)",
                (Language::Korean, LanguagePreference::Korean) => "한국어",
                (Language::English, LanguagePreference::Korean) => "Korean",
                (Language::Korean, LanguagePreference::English) => "영어",
                (Language::English, LanguagePreference::English) => "English",
            };
            egui::ComboBox::from_id_salt("language-select")
                .selected_text(option_label(selected))
                .show_ui(ui, |ui| {
                    for lang in [
                        LanguagePreference::System,
                        LanguagePreference::Korean,
                        LanguagePreference::English,
                    ] {
                        ui.selectable_value(&mut selected, lang, option_label(lang));
                    }
                });
            if selected != self.settings.language {
                self.settings.language = selected;
                self.language = selected.resolve();
                self.persist_settings();
                self.status = self.tr("언어가 변경되었습니다.", "Language updated.").to_string();
            }
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(self.tr("테마", "Theme"));
            let mut theme = self.settings.theme;
            for option in Theme::ALL {
                let label = match option {
                    Theme::Dark => self.tr("어둡게", "Dark"),
                    Theme::Light => self.tr("밝게", "Light"),
                };
                ui.radio_value(&mut theme, option, label);
            }
            if theme != self.settings.theme {
                self.settings.theme = theme;
                theme.apply(ctx);
                self.persist_settings();
            }
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(self.tr("썸네일 크기", "Thumbnail size"));
            let mut size = self.settings.thumbnail_size;
            let resp = ui.add(
                egui::DragValue::new(&mut size)
                    .range(MIN_THUMB_SIZE..=MAX_THUMB_SIZE)
                    .suffix(" px"),
            );
            if resp.changed() {
                self.settings.thumbnail_size = clamp_thumb_size(size);
                self.thumbs.set_size(self.settings.thumbnail_size);
            }
            if resp.drag_stopped() || resp.lost_focus() {
                self.persist_settings();
            }
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(self.tr("샘플 이미지 폴더", "Sample images folder"));
            ui.monospace(self.settings.samples_dir().display().to_string());
            if ui.button(self.tr("선택...", "Choose...")).clicked()
                && let Some(dir) = FileDialog::new().pick_folder()
            {
                self.settings.samples_dir = Some(dir);
                self.persist_settings();
            }
        });

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(6.0);
        ui.heading(self.tr("버전", "Version"));
        ui.label(format!(
            "{}: {}",
            self.tr("앱 버전", "App version"),
            self.app_version
        ));
    }
}
