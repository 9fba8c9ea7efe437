// src/gui/actions/refresh.rs
use crate::gui::{app::App, progress::GuiProgress};

/// First load: served from the store if it already has a table.
pub fn load(app: &mut App) {
    run(app, false);
}

/// Drop the store's cache and fetch both sites again.
pub fn refresh(app: &mut App) {
    run(app, true);
}

fn run(app: &mut App, force: bool) {
    logf!("Fetch: Begin (force={})", force);

    let mut prog = GuiProgress::new(app.status.clone());

    let res = if force {
        app.store.refresh(Some(&mut prog)).map(|t| t.len())
    } else {
        app.store.load(Some(&mut prog)).map(|t| t.len())
    };

    match res {
        Ok(rows) => {
            logf!("Fetch: OK rows={}", rows);
            app.rebuild_view();
            app.status(format!("Ready – {rows} attractions loaded"));
        }
        Err(e) => {
            loge!("Fetch: Error: {}", e);
            app.rebuild_view();
            app.status(format!("Error: {e}"));
        }
    }
}
