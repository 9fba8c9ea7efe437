// src/gui/components/data_table.rs
//
// Draws the filtered table. Purely a view: reads App, never writes it.
// The url column is a clickable link; the raw url stays in the store.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{EXPORT_HEADERS, LINK_LABEL};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(view) = app.view() else {
        ui.label("No data loaded. Press Refresh to fetch.");
        return;
    };

    ui.label(view.summary());

    if let Some(notice) = view.empty_notice() {
        ui.label(notice);
        return;
    }

    let avail_h = ui.available_height();
    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(avail_h)
        .max_scroll_height(avail_h)
        .column(Column::initial(200.0).resizable(true).clip(true).at_least(60.0))
        .column(Column::initial(320.0).resizable(true).clip(true).at_least(60.0))
        .column(Column::remainder().at_least(40.0))
        .header(24.0, |mut header| {
            for title in EXPORT_HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(rec) = view.row(row.index()) else { return };
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(rec.source.label());
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(rec.name.as_str());
                });
                row.col(|ui| {
                    ui.hyperlink_to(LINK_LABEL, &rec.url).on_hover_text(rec.url.as_str());
                });
            });
        });
}
