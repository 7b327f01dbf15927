//! Test helpers for laying out problem and plan files on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Two nodes joined by a weight-3 edge, one vehicle and one task.
pub(super) const SLOW_EDGE: &str = "2 1 1 1\n0\n0 1 3\n0 0 1\n";
/// Optimal plan for [`SLOW_EDGE`], completing at step 5.
pub(super) const SLOW_DELIVERY: &str = r#"{"commands": [{"1": "PICK UP"}, {"1": "GO 0 1"}, {"1": "FORWARD"}, {"1": "FORWARD"}, {"1": "DROP"}]}"#;
/// Plan whose first command breaks the rules.
pub(super) const EARLY_DROP: &str = r#"{"commands": [{"1": "DROP"}]}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directory");
    }
    std::fs::write(path, contents).expect("write fixture file");
}

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    pub(super) fn write(&self, relative: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(relative);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn output_text(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("stdout utf-8")
}
