//! Showing saved figures

use std::path::Path;
use std::process::Command;
use std::str::FromStr;
use std::thread::{self, JoinHandle};

use statsintro_core::{Error, Result};
use tracing::{debug, warn};

/// Something that can show a saved figure file
pub trait Viewer {
    fn show(&self, path: &Path) -> Result<()>;
}

/// Viewer that shows nothing, for batch runs and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Viewer for Headless {
    fn show(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "headless display, nothing to show");
        Ok(())
    }
}

/// Opens figures with the desktop's default image viewer
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemViewer {
    /// Block until the opener exits
    pub wait: bool,
}

impl SystemViewer {
    fn command(path: &Path) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl Viewer for SystemViewer {
    fn show(&self, path: &Path) -> Result<()> {
        launch(Self::command(path), self.wait).map(drop)
    }
}

/// Run the viewer command, blocking on it when `wait` is set
///
/// Without `wait` the child is reaped on a background thread, whose handle
/// is returned.
fn launch(mut cmd: Command, wait: bool) -> Result<Option<JoinHandle<()>>> {
    debug!(?cmd, wait, "launching viewer");
    let mut child = cmd
        .spawn()
        .map_err(|e| Error::Display(format!("cannot launch viewer {:?}: {e}", cmd.get_program())))?;
    if !wait {
        let reaper = thread::spawn(move || match child.wait() {
            Ok(status) => debug!(%status, "viewer exited"),
            Err(e) => warn!(error = %e, "viewer could not be reaped"),
        });
        return Ok(Some(reaper));
    }
    let status = child
        .wait()
        .map_err(|e| Error::Display(format!("viewer did not finish: {e}")))?;
    if !status.success() {
        return Err(Error::Display(format!("viewer exited with {status}")));
    }
    Ok(None)
}

/// How saved figures are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Do not display
    #[default]
    None,
    /// Open in the system viewer and continue
    Open,
    /// Open in the system viewer and wait for it to exit
    Wait,
}

impl DisplayMode {
    /// The viewer implementing this mode
    pub fn viewer(self) -> Box<dyn Viewer> {
        match self {
            DisplayMode::None => Box::new(Headless),
            DisplayMode::Open => Box::new(SystemViewer { wait: false }),
            DisplayMode::Wait => Box::new(SystemViewer { wait: true }),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(DisplayMode::None),
            "open" => Ok(DisplayMode::Open),
            "wait" => Ok(DisplayMode::Wait),
            other => Err(Error::InvalidParameter(format!(
                "display mode '{other}' is not one of none, open, wait"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_parsing() {
        assert_eq!("none".parse::<DisplayMode>().unwrap(), DisplayMode::None);
        assert_eq!(" Open ".parse::<DisplayMode>().unwrap(), DisplayMode::Open);
        assert_eq!("WAIT".parse::<DisplayMode>().unwrap(), DisplayMode::Wait);
        let err = "popup".parse::<DisplayMode>().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_headless_accepts_missing_file() {
        assert!(Headless.show(Path::new("/nonexistent/figure.png")).is_ok());
        assert!(DisplayMode::None.viewer().show(Path::new("x.png")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_open_mode_reaps_the_viewer() {
        let reaper = launch(Command::new("true"), false).unwrap();
        reaper.expect("open mode hands back a reaper").join().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_wait_mode_reports_failed_viewer() {
        assert!(launch(Command::new("true"), true).unwrap().is_none());
        let err = launch(Command::new("false"), true).unwrap_err();
        assert!(matches!(err, Error::Display(_)));
    }

    #[test]
    fn test_missing_viewer_program() {
        let err = launch(Command::new("statsintro-no-such-viewer"), false).unwrap_err();
        assert!(matches!(err, Error::Display(_)));
    }
}
