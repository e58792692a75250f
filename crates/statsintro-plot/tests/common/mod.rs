//! Shared utilities for integration tests

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use statsintro_core::Result;
use statsintro_plot::Viewer;

/// Fresh, empty output directory unique to one test
pub fn temp_out_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("statsintro-plot-{}-{name}", std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Viewer recording every path it is asked to show, and whether the file
/// existed at that moment
#[derive(Default)]
pub struct RecordingViewer {
    pub shown: RefCell<Vec<(PathBuf, bool)>>,
}

impl Viewer for RecordingViewer {
    fn show(&self, path: &Path) -> Result<()> {
        self.shown
            .borrow_mut()
            .push((path.to_path_buf(), path.is_file()));
        Ok(())
    }
}
