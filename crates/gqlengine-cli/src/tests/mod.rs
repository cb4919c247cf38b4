mod graphql_files_tests;

use crate::parse_log_level;

use std::path::PathBuf;

/// A scratch directory under the system temp dir, removed on drop.
pub(super) struct ScratchDir(PathBuf);

impl ScratchDir {
    pub(super) fn new(name: &str) -> Self {
        let path = std::env::temp_dir()
            .join(format!("gqlengine-cli-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    pub(super) fn write(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.0.join(relative_path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    pub(super) fn path(&self) -> &PathBuf {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[test]
fn log_levels_accept_either_case() {
    assert_eq!(parse_log_level("warn"), Some(tracing::Level::WARN));
    assert_eq!(parse_log_level("TRACE"), Some(tracing::Level::TRACE));
    assert_eq!(parse_log_level("verbose"), Some(tracing::Level::DEBUG));
    assert_eq!(parse_log_level("loud"), None);
}
