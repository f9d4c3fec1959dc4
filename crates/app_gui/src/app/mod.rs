//! egui front end: owns the catalog and every piece of view state.

mod coordinator;
mod settings;
pub mod style;
mod tag_dialog;
mod thumbs;

use crate::config::AppSettings;
use crate::i18n::Language;
use eframe::{App, Frame, egui};
use std::collections::VecDeque;
use std::path::PathBuf;
use tag_dialog::TagDialog;
use thumbs::ThumbCache;
use wardrobe_core::{
    Catalog, ComposedOutfit, FsImageResolver, ImportOutcome, ImportReport, ItemId,
    OutfitSelection, RecommendationRequest, SidebarState, expand_dropped,
};

const OUTFIT_IMAGE_SIZE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Panel {
    Coordinator,
    StyleAnalysis,
    Settings,
}

pub(crate) struct UiApp {
    settings: AppSettings,
    language: Language,
    panel: Panel,
    catalog: Catalog,
    resolver: FsImageResolver,
    sidebar: SidebarState,
    pending: VecDeque<ItemId>,
    tag_dialog: Option<TagDialog>,
    /// Outcomes of the import batch in progress.
    batch: ImportReport,
    selection: OutfitSelection,
    outfit: Option<ComposedOutfit>,
    request: RecommendationRequest,
    thumbs: ThumbCache,
    outfit_thumbs: ThumbCache,
    status: String,
    app_version: &'static str,
    theme_applied: bool,
}

impl UiApp {
    pub(crate) fn new(settings: AppSettings) -> Self {
        let language = settings.language.resolve();
        let sidebar = SidebarState {
            open: settings.sidebar_open,
            ..SidebarState::default()
        };
        Self {
            language,
            sidebar,
            thumbs: ThumbCache::new(settings.thumbnail_size),
            outfit_thumbs: ThumbCache::new(OUTFIT_IMAGE_SIZE),
            settings,
            panel: Panel::Coordinator,
            catalog: Catalog::new(),
            resolver: FsImageResolver,
            pending: VecDeque::new(),
            tag_dialog: None,
            batch: ImportReport::default(),
            selection: OutfitSelection::default(),
            outfit: None,
            request: RecommendationRequest::default(),
            status: String::new(),
            app_version: env!("WARDROBE_VERSION"),
            theme_applied: false,
        }
    }

    pub(crate) fn tr(&self, ko: &'static str, en: &'static str) -> &'static str {
        self.language.pick(ko, en)
    }

    /// Queues files for tagging; folders are expanded to their images.
    fn enqueue_imports(&mut self, paths: Vec<PathBuf>) {
        let files = expand_dropped(paths);
        tracing::debug!("queued {} file(s) for import", files.len());
        self.pending.extend(files.into_iter().map(ItemId::from));
        if self.tag_dialog.is_none() {
            self.advance_imports();
        }
    }

    /// Opens the tag dialog for the next readable pending file, or reports
    /// the batch once the queue is drained.
    fn advance_imports(&mut self) {
        while let Some(id) = self.pending.pop_front() {
            match self.catalog.prepare_import(&id, &self.resolver) {
                Ok(defaults) => {
                    self.tag_dialog = Some(TagDialog::new(id, defaults));
                    return;
                }
                Err(err) => {
                    tracing::warn!("skipping {id}: {err}");
                    self.batch.entries.push((id, ImportOutcome::Failed(err)));
                }
            }
        }
        if !self.batch.entries.is_empty() {
            let batch = std::mem::take(&mut self.batch);
            self.status = self.import_summary(&batch);
        }
    }

    fn import_summary(&self, batch: &ImportReport) -> String {
        let mut summary = format!(
            "{}: {} · {}: {} · {}: {}",
            self.tr("등록", "Imported"),
            batch.stored(),
            self.tr("취소", "Declined"),
            batch.declined(),
            self.tr("실패", "Failed"),
            batch.failures().count(),
        );
        if let Some((id, err)) = batch.failures().next() {
            summary.push_str(&format!(" ({id}: {err})"));
        }
        summary
    }

    fn persist_settings(&mut self) {
        if let Err(e) = self.settings.save_default() {
            tracing::warn!("settings not saved: {e:#}");
            self.status = format!("{}: {e}", self.tr("설정 저장 실패", "Saving settings failed"));
        }
    }

    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.enqueue_imports(dropped);
        }
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if !self.theme_applied {
            self.settings.theme.apply(ctx);
            self.theme_applied = true;
        }
        self.collect_dropped_files(ctx);

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let tabs = [
                    (Panel::Coordinator, self.tr("코디네이터", "Coordinator")),
                    (Panel::StyleAnalysis, self.tr("스타일 분석", "Style analysis")),
                    (Panel::Settings, self.tr("설정", "Settings")),
                ];
                for (panel, label) in tabs {
                    ui.selectable_value(&mut self.panel, panel, label);
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{}: {}",
                    self.tr("옷장", "Wardrobe"),
                    self.catalog.len()
                ));
                if !self.pending.is_empty() {
                    ui.label(format!(
                        "· {}: {}",
                        self.tr("대기 중", "Pending"),
                        self.pending.len()
                    ));
                }
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        match self.panel {
            Panel::Coordinator => self.render_coordinator(ctx),
            Panel::StyleAnalysis => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading(self.tr("스타일 분석", "Style analysis"));
                    ui.label(self.tr("준비 중입니다.", "Coming soon."));
                });
            }
            Panel::Settings => {
                egui::CentralPanel::default().show(ctx, |ui| self.render_settings_panel(ctx, ui));
            }
        }

        self.render_tag_dialog(ctx);
    }
}
