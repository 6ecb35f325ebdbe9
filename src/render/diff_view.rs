use super::anim::{interpolate, spring};
use super::frame::{Element, Style};
use super::theme;
use crate::pr::types::{DiffLine, LineKind};

/// Additional frames of delay per line index.
const LINE_STAGGER: i64 = 3;

/// Code panel for the sampled diff: the container scales in, then each line
/// slides in from the left with add/remove tinting.
pub fn render(file_name: &str, lines: &[DiffLine], local_frame: i64, fps: u32) -> Vec<Element> {
    let container_spring = spring(local_frame, fps, 20.0);
    let mut elements = Vec::with_capacity(lines.len() + 2);

    elements.push(Element::Panel {
        id: "diff.panel",
        background: theme::SURFACE,
        border: theme::BORDER,
        style: Style {
            opacity: container_spring,
            scale: interpolate(container_spring, [0.0, 1.0], [0.95, 1.0]),
            ..Style::default()
        },
    });
    elements.push(Element::Text {
        id: "diff.fileName",
        content: file_name.to_string(),
        color: theme::TEXT_MUTED,
        font_size: 14,
        style: Style {
            opacity: container_spring,
            ..Style::default()
        },
    });

    for (i, line) in lines.iter().enumerate() {
        let line_spring = spring(local_frame - LINE_STAGGER * i as i64, fps, 15.0);
        elements.push(Element::DiffRow {
            line_number: line.line_number,
            indicator: indicator(line.kind),
            indicator_color: indicator_color(line.kind),
            content: line.content.clone(),
            background: row_background(line.kind),
            style: Style {
                opacity: interpolate(line_spring, [0.0, 1.0], [0.0, 1.0]),
                offset_x: interpolate(line_spring, [0.0, 1.0], [-20.0, 0.0]),
                ..Style::default()
            },
        });
    }

    elements
}

fn indicator(kind: LineKind) -> char {
    match kind {
        LineKind::Addition => '+',
        LineKind::Deletion => '-',
        LineKind::Context => ' ',
    }
}

fn indicator_color(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Addition => theme::SUCCESS,
        LineKind::Deletion => theme::DANGER,
        LineKind::Context => theme::TEXT_MUTED,
    }
}

fn row_background(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Addition => theme::ADDITION_TINT,
        LineKind::Deletion => theme::DELETION_TINT,
        LineKind::Context => theme::TRANSPARENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<DiffLine> {
        vec![
            DiffLine {
                kind: LineKind::Context,
                content: "fn main() {".to_string(),
                line_number: Some(1),
            },
            DiffLine {
                kind: LineKind::Deletion,
                content: "    old();".to_string(),
                line_number: Some(2),
            },
            DiffLine {
                kind: LineKind::Addition,
                content: "    new();".to_string(),
                line_number: Some(2),
            },
        ]
    }

    fn rows(elements: &[Element]) -> Vec<(char, &'static str, &'static str, Style)> {
        elements
            .iter()
            .filter_map(|e| match e {
                Element::DiffRow {
                    indicator,
                    indicator_color,
                    background,
                    style,
                    ..
                } => Some((*indicator, *indicator_color, *background, *style)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_line_kinds_map_to_markers_and_tints() {
        let elements = render("src/main.rs", &lines(), 60, 30);
        let rows = rows(&elements);
        assert_eq!(
            (rows[0].0, rows[0].1, rows[0].2),
            (' ', theme::TEXT_MUTED, theme::TRANSPARENT)
        );
        assert_eq!(
            (rows[1].0, rows[1].1, rows[1].2),
            ('-', theme::DANGER, theme::DELETION_TINT)
        );
        assert_eq!(
            (rows[2].0, rows[2].1, rows[2].2),
            ('+', theme::SUCCESS, theme::ADDITION_TINT)
        );
    }

    #[test]
    fn test_lines_stagger_by_three_frames() {
        let elements = render("src/main.rs", &lines(), 4, 30);
        let rows = rows(&elements);
        // Line 0 started at frame 0, line 1 at 3, line 2 at 6.
        assert!(rows[0].3.opacity > rows[1].3.opacity);
        assert!(rows[1].3.opacity > 0.0);
        assert_eq!(rows[2].3.opacity, 0.0);
    }

    #[test]
    fn test_container_scales_from_095() {
        let elements = render("src/main.rs", &lines(), 0, 30);
        let panel = elements.iter().find_map(|e| match e {
            Element::Panel { id: "diff.panel", style, .. } => Some(*style),
            _ => None,
        });
        let panel = panel.unwrap();
        assert_eq!(panel.opacity, 0.0);
        assert_eq!(panel.scale, 0.95);

        let elements = render("src/main.rs", &lines(), 60, 30);
        let panel = elements
            .iter()
            .find_map(|e| match e {
                Element::Panel { id: "diff.panel", style, .. } => Some(*style),
                _ => None,
            })
            .unwrap();
        assert!((panel.scale - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_file_name_is_shown() {
        let elements = render("src/components/LoginForm.tsx", &lines(), 30, 30);
        assert!(elements.iter().any(|e| matches!(
            e,
            Element::Text { id: "diff.fileName", content, .. }
                if content == "src/components/LoginForm.tsx"
        )));
    }
}
