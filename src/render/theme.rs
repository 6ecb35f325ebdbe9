//! GitHub-dark palette shared by all segment renderers.

use crate::pr::types::FileStatus;

pub const BACKGROUND: &str = "#0d1117";
pub const SURFACE: &str = "#161b22";
pub const SURFACE_LIGHT: &str = "#21262d";
pub const BORDER: &str = "#30363d";
pub const TEXT: &str = "#c9d1d9";
pub const TEXT_MUTED: &str = "#8b949e";
pub const ACCENT: &str = "#58a6ff";
pub const SUCCESS: &str = "#3fb950";
pub const DANGER: &str = "#f85149";
pub const WARNING: &str = "#d29922";
pub const WHITE: &str = "#ffffff";

/// Translucent row tints for added/removed diff lines.
pub const ADDITION_TINT: &str = "rgba(63, 185, 80, 0.15)";
pub const DELETION_TINT: &str = "rgba(248, 81, 73, 0.15)";
pub const TRANSPARENT: &str = "transparent";

/// Caption backdrop.
pub const CAPTION_BACKDROP: &str = "rgba(0, 0, 0, 0.85)";

/// Marker color for a file row, keyed by change status.
pub fn status_color(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Added => SUCCESS,
        FileStatus::Modified => WARNING,
        FileStatus::Deleted => DANGER,
        FileStatus::Renamed => ACCENT,
    }
}
