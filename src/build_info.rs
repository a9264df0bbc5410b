//! Commit hash and build date embedded by build.rs, shown by `angler --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string for the CLI.
pub fn version_line() -> String {
    format!(
        "angler {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_build_date_format() {
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }

    #[test]
    fn test_version_line_names_crate() {
        let line = version_line();
        assert!(line.starts_with("angler "));
        assert!(line.contains(BUILD_COMMIT));
    }
}
