// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::MIN_LEN_MAX;
use crate::config::options::AppOptions;
use crate::core::net::HttpClient;
use crate::data::SourceKind;
use crate::file;
use crate::progress::Progress;
use crate::store::AttractionStore;

/// Scrape Agadir attractions, filter them, print the table and write CSV.
#[derive(Parser, Debug)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Keep names containing this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub keyword: String,

    /// Keep categories containing this text (categories are never populated yet)
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Minimum length of attraction name (0 disables)
    #[arg(
        short,
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=MIN_LEN_MAX as i64)
    )]
    pub min_len: u8,

    /// Output CSV file, or a directory ending in '/'
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the table only; do not write CSV
    #[arg(long)]
    pub no_export: bool,

    /// Per-request timeout; without it a request may wait forever
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.filter.keyword = self.keyword.clone();
        opts.filter.category = self.category.clone();
        opts.filter.set_min_len(usize::from(self.min_len));
        opts.scrape.timeout = self.timeout_secs.map(Duration::from_secs);
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Progress lines on stderr so stdout stays the table.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, source: SourceKind, kept: usize) {
        eprintln!("  {}: {} links", source.label(), kept);
    }
}

pub fn run() -> color_eyre::Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> color_eyre::Result<()> {
    let opts = args.to_options();
    logf!("CLI: Begin filter={:?} out={}", opts.filter, opts.export.out_path().display());

    let mut store = AttractionStore::new(HttpClient::new(&opts.scrape)?);
    let table = store.load(Some(&mut CliProgress))?;

    let view = table.filter(&opts.filter);
    print!("{}", view.render_text());

    if !args.no_export {
        let path = file::write_export(&opts.export, &view)?;
        logf!("CLI: Wrote rows={} → {}", view.len(), path.display());
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let args = Args::try_parse_from([
            "cli", "--keyword", "park", "-m", "5", "--out", "picks/park.csv", "--timeout-secs", "20",
        ])
        .unwrap();
        let opts = args.to_options();
        assert_eq!(opts.filter.keyword, "park");
        assert_eq!(opts.filter.min_len, 5);
        assert!(opts.filter.category.is_empty());
        assert_eq!(opts.scrape.timeout, Some(Duration::from_secs(20)));
        assert_eq!(opts.export.out_path(), PathBuf::from("picks").join("park.csv"));
    }

    #[test]
    fn defaults_have_no_timeout_and_no_filters() {
        let opts = Args::try_parse_from(["cli"]).unwrap().to_options();
        assert!(!opts.filter.is_active());
        assert_eq!(opts.scrape.timeout, None);
    }

    #[test]
    fn min_len_above_slider_range_is_rejected() {
        assert!(Args::try_parse_from(["cli", "--min-len", "51"]).is_err());
    }
}
