use super::anim::{interpolate, spring};
use super::frame::{Element, Style};
use super::theme;

/// Length of the linear fade-out at the end of the demo segment.
const FADE_OUT_SECONDS: f64 = 1.5;

/// Full-bleed browser recording with a chrome bar, spring fade-in and a
/// linear fade-out over the last one and a half seconds.
pub fn render(src: &str, local_frame: i64, duration_frames: u32, fps: u32) -> Vec<Element> {
    let entry = spring(local_frame, fps, 20.0);
    let fade_in = interpolate(entry, [0.0, 1.0], [0.0, 1.0]);

    let duration = f64::from(duration_frames);
    let fade_out = interpolate(
        local_frame as f64,
        [duration - FADE_OUT_SECONDS * f64::from(fps), duration],
        [1.0, 0.0],
    );
    let opacity = fade_in.min(fade_out);

    vec![
        Element::Panel {
            id: "demo.chrome",
            background: theme::SURFACE_LIGHT,
            border: theme::BORDER,
            style: Style {
                opacity,
                ..Style::default()
            },
        },
        Element::Text {
            id: "demo.label",
            content: "Live Demo".to_string(),
            color: theme::TEXT_MUTED,
            font_size: 13,
            style: Style {
                opacity,
                ..Style::default()
            },
        },
        Element::Video {
            src: src.to_string(),
            style: Style {
                opacity,
                scale: interpolate(entry, [0.0, 1.0], [0.95, 1.0]),
                ..Style::default()
            },
        },
    ]
}
