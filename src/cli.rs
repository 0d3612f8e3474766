use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::export::destination::DEFAULT_PROJECT_ROOT;

#[derive(Parser)]
#[command(
    name = "clipsave",
    about = "Save a clipboard image to the project's LogHoursInterface.png"
)]
pub struct Cli {
    /// Project root containing src/assets
    #[arg(long, env = "CLIPSAVE_PROJECT_ROOT", default_value = DEFAULT_PROJECT_ROOT)]
    pub project_root: PathBuf,

    /// Clipboard bridge to use
    #[arg(long, value_enum, default_value_t = Backend::Auto)]
    pub backend: Backend,

    /// Exit non-zero when the image could not be saved
    #[arg(long)]
    pub strict: bool,
}

/// Platform clipboard bridge selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Pick from the build target and session environment
    Auto,
    /// `osascript` (AppleScript)
    Macos,
    /// `zenity` + `xclip`
    X11,
    /// `zenity` + `wl-copy`/`wl-paste`
    Wayland,
}
