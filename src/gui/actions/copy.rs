// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = match app.view() {
        None => {
            logd!("Copy: Clicked, but nothing is loaded");
            app.status("Nothing to copy (no data loaded)");
            return;
        }
        Some(view) if view.is_empty() => {
            logd!("Copy: Clicked, but the view is empty");
            app.status("Nothing to copy");
            return;
        }
        Some(view) => {
            logf!("Copy: rows={}", view.len());
            csv::to_export_string(&view)
        }
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
