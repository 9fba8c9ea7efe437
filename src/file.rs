// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_view;
use crate::data::FilteredView;

/// Write the view to `export.out_path()` as UTF-8 CSV, creating parent
/// directories as needed. Returns the final path written to.
pub fn write_export(export: &ExportOptions, view: &FilteredView<'_>) -> io::Result<PathBuf> {
    let path = export.out_path();
    write_export_to(&path, view)?;
    Ok(path)
}

pub fn write_export_to(path: &Path, view: &FilteredView<'_>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite
    write_view(&mut out, view)?;
    out.flush()
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
