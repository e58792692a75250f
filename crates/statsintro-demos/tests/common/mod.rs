//! Shared utilities for integration tests

use std::path::PathBuf;

use statsintro_plot::OutputConfig;

/// Fresh, empty output directory unique to one test
pub fn temp_out_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("statsintro-demos-{}-{name}", std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Headless output into a fresh directory at a low resolution
pub fn test_output(name: &str) -> OutputConfig {
    OutputConfig::default()
        .with_out_dir(temp_out_dir(name))
        .with_dpi(50)
}

/// Assert that every file exists and is a non-empty PNG
pub fn assert_pngs(output: &OutputConfig, files: &[&str]) {
    for file in files {
        let path = output.target(file);
        let bytes = std::fs::read(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(bytes.starts_with(b"\x89PNG"), "{} is not a PNG", path.display());
    }
}
