// src/config/consts.rs

// Sources
pub const EXPLORE_LABEL: &str = "Explore Agadir Souss Massa";
pub const EXPLORE_URL: &str = "https://explore-agadirsoussmassa.com/en/";
pub const EXPLORE_SELECTOR: &str = r#"a[href*="/en/"]"#;
pub const EXPLORE_HREF_MARKER: &str = "en/";

pub const VISIT_LABEL: &str = "Visit Agadir";
pub const VISIT_URL: &str = "https://visitagadir.com/";
pub const VISIT_SELECTOR: &str = "a[href]";
pub const VISIT_OWN_DOMAIN: &str = "visitagadir.com";

// Names must be strictly longer than this (in chars)
pub const MIN_NAME_CHARS: usize = 3;

// Net config
pub const USER_AGENT: &str = concat!("agadir_scrape/", env!("CARGO_PKG_VERSION"));

// Filters
pub const MIN_LEN_MAX: usize = 50;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Export
pub const EXPORT_HEADERS: [&str; 3] = ["source", "name", "url"];
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "agadir_attractions_filtered";
pub const EXPORT_EXT: &str = "csv";

// Presentation
pub const APP_TITLE: &str = "Beyond the Map - Agadir Attractions Scraper";
pub const APP_INTRO: &str = "This app scrapes tourist attractions from Explore Agadir Souss Massa \
    and VisitAgadir.com. Use the filters below to explore the data.";
pub const EMPTY_MESSAGE: &str = "No results match the filter criteria.";
pub const LINK_LABEL: &str = "Link";
