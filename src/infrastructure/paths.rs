//! Filesystem locations inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, which points at the
//! directory Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Name of the trace output file.
pub const TRACE_FILE_NAME: &str = "shoplist-otlp.json";

/// Returns the plugin's data directory, `/host/.local/share/zellij/shoplist`.
///
/// Only trace output is written here; the shopping list itself is never
/// persisted.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("shoplist")
}

/// Returns the full path of the trace file.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(
            trace_file(),
            PathBuf::from("/host/.local/share/zellij/shoplist/shoplist-otlp.json")
        );
    }
}
