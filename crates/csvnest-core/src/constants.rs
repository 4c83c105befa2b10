//! Shared constants

/// Maximum number of files held in the upload queue. Uploads past this are dropped.
pub const MAX_QUEUED_FILES: usize = 1000;

pub const MIN_TITLE_LENGTH: usize = 10;
pub const MAX_TITLE_LENGTH: usize = 120;
pub const DEFAULT_TITLE_LENGTH: usize = 80;

pub const MIN_KEYWORD_COUNT: usize = 5;
pub const MAX_KEYWORD_COUNT: usize = 50;
pub const DEFAULT_KEYWORD_COUNT: usize = 25;

/// Extensions advertised by file intake. Advisory only: other files are still queued.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["svg", "jpg", "jpeg", "png", "mp4", "mov", "webm", "avi"];

/// Member names written into every export archive. All carry the same CSV body.
pub const ARCHIVE_MEMBERS: [&str; 3] = ["AI.csv", "EPS.csv", "SVG.csv"];

// Local store keys
pub const THEME_KEY: &str = "csvnest_theme";
pub const USER_KEY: &str = "csvnest_user";
pub const API_KEY_KEY: &str = "csvnest_api_key";

/// File name of the local key-value store inside the state directory.
pub const STORE_FILE_NAME: &str = "storage.json";
