// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc::{Receiver, TryRecvError}},
};

use eframe::egui;

use crate::{
    analytics::{Analytics, share_of_total},
    config::state::{AppState, View},
    filter::FilterOptions,
    store::{ProfileStore, StoreEvent},
};

use super::{
    pages::Page,
    router,
    worker::{self, JobResult, Status},
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Profile Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(App::new(state, &cc.egui_ctx)))),
    )?;
    Ok(())
}

/// Bulk-add dialog state.
#[derive(Default)]
pub struct AddDialog {
    pub open: bool,
    pub text: String,
}

pub struct App {
    // options + persisted GUI prefs (UI thread only)
    pub state: AppState,

    // records, criteria, sort, derived view
    pub store: ProfileStore,

    // derived from the store, rebuilt when its revision moves
    pub filter_options: FilterOptions,
    pub analytics: Analytics,
    seen_revision: u64,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub add_dialog: AddDialog,

    // URL of the row opened in the detail window
    pub selected: Option<String>,

    // status/progress (workers write here)
    pub status: Status,
    pub running: bool,
    pub job: Option<Receiver<JobResult>>,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let status: Status = Arc::new(Mutex::new(s!("Idle")));

        let mut store = ProfileStore::new();
        store.set_sort(state.gui.sort);

        // Keep the status line in step with whatever the store does.
        let st = status.clone();
        store.subscribe(move |ev| match *ev {
            StoreEvent::Replaced { total, filtered } => {
                worker::set_status(&st, format!("Loaded {total} profile(s), showing {filtered}"));
            }
            StoreEvent::Filtered { total, filtered } => {
                worker::set_status(&st, format!(
                    "Showing {filtered} of {total} ({}%)",
                    share_of_total(filtered, total)
                ));
            }
            StoreEvent::Sorted { spec } => {
                worker::set_status(&st, format!("Sorted by {} {}", spec.key, spec.direction.arrow()));
            }
        });

        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let fetch_on_start = state.gui.fetch_on_start;

        logf!("Init: backend={}, view={:?}", state.options.backend.base_url, state.gui.current_view);

        let mut app = Self {
            state,
            store,
            filter_options: FilterOptions::default(),
            analytics: Analytics::default(),
            seen_revision: u64::MAX,
            out_path_text,
            out_path_dirty: false,
            add_dialog: AddDialog::default(),
            selected: None,
            status,
            running: false,
            job: None,
        };

        if fetch_on_start {
            super::actions::fetch(&mut app, ctx);
        }
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_view(&self) -> View { self.state.gui.current_view }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_for(self.current_view()) }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        worker::set_status(&self.status, msg);
    }

    /// Rebuild cached derivations if the store changed since last frame.
    fn sync_derived(&mut self) {
        let rev = self.store.revision();
        if rev == self.seen_revision {
            return;
        }
        self.filter_options = self.store.filter_options();
        self.analytics = self.store.analytics();
        self.seen_revision = rev;
    }

    /// Drain finished background work into the store.
    fn poll_job(&mut self) {
        let Some(rx) = self.job.take() else { return };

        loop {
            match rx.try_recv() {
                Ok(JobResult::Submitted(Ok(resp))) => {
                    logf!("Add: {} ({})", resp.message, resp.count);
                    self.add_dialog = AddDialog::default();
                }
                Ok(JobResult::Submitted(Err(e))) => {
                    loge!("Add: Error: {}", e);
                    self.status(format!("Submit failed: {e}"));
                    break;
                }
                Ok(JobResult::Fetched(Ok(profiles))) => {
                    // Previous data stays put on failure; only a success replaces it.
                    self.store.replace_all(profiles);
                    break;
                }
                Ok(JobResult::Fetched(Err(e))) => {
                    loge!("Fetch: Error: {}", e);
                    self.status(format!("Fetch failed: {e}"));
                    break;
                }
                Err(TryRecvError::Empty) => {
                    self.job = Some(rx);
                    return;
                }
                Err(TryRecvError::Disconnected) => break,
            }
        }
        self.running = false;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();
        self.sync_derived();

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            super::components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            super::components::action_bar::draw(ui, self);
        });

        if self.current_page().shows_filters() {
            egui::SidePanel::left("filters")
                .resizable(true)
                .default_width(240.0)
                .show(ctx, |ui| {
                    super::components::filter_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            page.draw(ui, self);
        });

        super::components::profile_detail::draw(ctx, self);
        super::components::add_dialog::draw(ctx, self);

        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
