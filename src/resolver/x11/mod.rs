//! X11 platform adapter.
//!
//! Uses `zenity` for the chooser and `xclip` for the `CLIPBOARD`
//! selection.

mod clipboard;

pub use clipboard::X11Bridge;
