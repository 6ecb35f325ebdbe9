use super::anim::{interpolate, spring};
use super::frame::{Element, Style};
use super::theme;
use crate::analysis::types::FileChange;

/// Frames before the first row starts its entrance.
const ROW_BASE_DELAY: i64 = 10;

/// Additional frames of delay per row index.
const ROW_STAGGER: i64 = 5;

/// Changed-files panel: header fades in, then rows cascade from the left,
/// each carrying its status marker and +/- counts.
pub fn render(files: &[FileChange], local_frame: i64, fps: u32) -> Vec<Element> {
    let header_spring = spring(local_frame, fps, 20.0);
    let mut elements = Vec::with_capacity(files.len() + 3);

    elements.push(Element::Panel {
        id: "fileList.panel",
        background: theme::SURFACE,
        border: theme::BORDER,
        style: Style::default(),
    });
    elements.push(Element::Text {
        id: "fileList.header",
        content: "Files Changed".to_string(),
        color: theme::TEXT,
        font_size: 16,
        style: Style {
            opacity: header_spring,
            ..Style::default()
        },
    });
    elements.push(Element::Text {
        id: "fileList.count",
        content: format!(
            "{} file{}",
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        ),
        color: theme::TEXT_MUTED,
        font_size: 14,
        style: Style {
            opacity: header_spring,
            ..Style::default()
        },
    });

    for (i, file) in files.iter().enumerate() {
        let delay = ROW_BASE_DELAY + ROW_STAGGER * i as i64;
        let row_spring = spring(local_frame - delay, fps, 15.0);
        elements.push(Element::FileRow {
            path: file.path.clone(),
            additions: file.additions,
            deletions: file.deletions,
            marker: file.status.marker(),
            marker_color: theme::status_color(file.status),
            zebra: i % 2 == 1,
            style: Style {
                opacity: interpolate(row_spring, [0.0, 1.0], [0.0, 1.0]),
                offset_x: interpolate(row_spring, [0.0, 1.0], [-30.0, 0.0]),
                ..Style::default()
            },
        });
    }

    elements
}
