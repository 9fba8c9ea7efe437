// src/gui/components/filter_bar.rs
//
// The three filter inputs. Any change rebuilds the row index; the store's
// table itself is never touched.

use eframe::egui;

use crate::{config::consts::MIN_LEN_MAX, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let filter = &mut app.state.options.filter;
    let mut changed = false;

    egui::Grid::new("filters")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Filter by keyword in name:");
            changed |= ui.text_edit_singleline(&mut filter.keyword).changed();
            ui.end_row();

            ui.label("Filter by category (not yet implemented):");
            changed |= ui.text_edit_singleline(&mut filter.category).changed();
            ui.end_row();

            ui.label("Minimum length of attraction name:");
            changed |= ui
                .add(egui::Slider::new(&mut filter.min_len, 0..=MIN_LEN_MAX))
                .changed();
            ui.end_row();
        });

    if changed {
        logd!("UI: Filter → {:?}", app.state.options.filter);
        app.rebuild_view();
    }
}
