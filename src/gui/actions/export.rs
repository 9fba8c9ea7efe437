// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        logf!("Export: Out path set → {}", app.out_path_text);
        app.out_path_dirty = false;
    }

    // An empty view still exports: header row only.
    let status_msg = match app.view() {
        None => {
            logd!("Export: Clicked, but nothing is loaded");
            s!("Nothing to export (no data loaded)")
        }
        Some(view) => {
            logf!("Export: Begin rows={}", view.len());
            match file::write_export(&app.state.options.export, &view) {
                Ok(path) => {
                    logf!("Export: OK rows={} → {}", view.len(), path.display());
                    format!("Exported {} row(s) → {}", view.len(), path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the view borrow is gone
    app.status(status_msg);
}
