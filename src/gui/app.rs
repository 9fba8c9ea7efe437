// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::{APP_INTRO, APP_TITLE}, state::AppState},
    core::net::HttpClient,
    data::FilteredView,
    store::AttractionStore,
};

use super::{actions, components};

pub fn run(mut options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::default();
    let client = HttpClient::new(&state.options.scrape)?;
    let store = AttractionStore::new(client);

    let size = [state.gui.window_w as f32, state.gui.window_h as f32];
    options.viewport = std::mem::take(&mut options.viewport)
        .with_inner_size(size)
        .with_title(APP_TITLE);

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, store)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub store: AttractionStore<HttpClient>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // rows of the store's table passing the current filter
    pub row_ix: Vec<usize>,

    // status line (progress sinks write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, store: AttractionStore<HttpClient>) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            store,
            out_path_text,
            out_path_dirty: false,
            row_ix: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        logf!("Init: loading attractions");
        actions::load(&mut app);
        app
    }

    /* ---------- tiny helpers ---------- */

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Current filtered view, if the store has a table.
    pub fn view(&self) -> Option<FilteredView<'_>> {
        self.store.table().map(|t| t.view(&self.row_ix))
    }

    /// Recompute `row_ix` from the store table and the filter options.
    pub fn rebuild_view(&mut self) {
        self.row_ix = match self.store.table() {
            Some(table) => table.filter(&self.state.options.filter).into_indices(),
            None => Vec::new(),
        };
        logd!(
            "View: filter={:?} rows={}",
            self.state.options.filter,
            self.row_ix.len()
        );
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.label(APP_INTRO);

            ui.separator();

            components::filter_bar::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
