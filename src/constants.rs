// Central constants for save scanning, paging and session lifetime.
pub const TOTAL_UNIVERSE_SIZE: i64 = 981; // full national dex, independent of catalog row count
pub const OWNED_STATUS: i64 = 2; // `<id>:<status>` status meaning "caught"
pub const SAVE_FILE_EXTENSION: &str = ".pk";
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
pub const DEFAULT_PAGE_SIZE: usize = 15;
pub const DEFAULT_SAVE_DIR: &str = "../world/data/pokemon";
pub const DEFAULT_PREFIX: &str = "!";
/// Absolute lifetime of a paging session; interactions do not extend it.
pub const SESSION_TIMEOUT_SECS: u64 = 60;
pub const DB_MAX_CONNECTIONS: u32 = 5;
