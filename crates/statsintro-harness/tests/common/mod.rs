//! Shared utilities for integration tests

use std::path::PathBuf;

use statsintro_plot::OutputConfig;

/// Headless output into a fresh directory unique to one test
pub fn temp_output(name: &str) -> OutputConfig {
    let dir: PathBuf =
        std::env::temp_dir().join(format!("statsintro-harness-{}-{name}", std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    OutputConfig::default().with_out_dir(dir).with_dpi(50)
}
