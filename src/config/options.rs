// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::data::FilterCriteria;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub filter: FilterCriteria,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// `None` means the request may block indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: OutputPath,
}

impl ExportOptions {
    /// `<dir>/<stem>.csv`
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        name.push(EXPORT_EXT);
        self.out_path.dir.join(name)
    }

    /// Parse GUI/CLI text into dir + stem. Ignores a pasted extension; the
    /// export is always CSV. A trailing separator or an existing directory
    /// keeps the current file stem.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        let p = PathBuf::from(crate::file::normalize_separators(s));

        if crate::file::looks_like_dir_hint(&p) || p.is_dir() {
            self.out_path.dir = p;
            return;
        }
        self.out_path.dir = p
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_is_filtered_csv() {
        let export = ExportOptions::default();
        assert_eq!(
            export.out_path(),
            PathBuf::from("out").join("agadir_attractions_filtered.csv")
        );
    }

    #[test]
    fn set_path_drops_pasted_extension() {
        let mut export = ExportOptions::default();
        export.set_path("exports/picks.txt");
        assert_eq!(export.out_path(), PathBuf::from("exports").join("picks.csv"));
    }

    #[test]
    fn set_path_with_dir_hint_keeps_stem() {
        let mut export = ExportOptions::default();
        export.set_path("exports/");
        assert_eq!(
            export.out_path(),
            PathBuf::from("exports").join("agadir_attractions_filtered.csv")
        );
    }

    #[test]
    fn bare_file_name_lands_in_working_dir() {
        let mut export = ExportOptions::default();
        export.set_path("mine.csv");
        assert_eq!(export.out_path(), PathBuf::from("mine.csv"));
    }
}
