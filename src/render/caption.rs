use super::anim::{interpolate, spring};
use super::frame::{Element, Style};
use super::theme;

/// Narration strip pinned to the bottom edge over a dark backdrop.
pub fn render(text: &str, local_frame: i64, fps: u32) -> Vec<Element> {
    let entry = spring(local_frame, fps, 15.0);

    vec![Element::CaptionBox {
        text: text.to_string(),
        background: theme::CAPTION_BACKDROP,
        style: Style {
            opacity: interpolate(entry, [0.0, 1.0], [0.0, 1.0]),
            offset_y: interpolate(entry, [0.0, 1.0], [10.0, 0.0]),
            ..Style::default()
        },
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_up_while_fading_in() {
        let at = |frame| match &render("Adds login flow.", frame, 30)[0] {
            Element::CaptionBox { style, .. } => *style,
            _ => panic!("expected caption box"),
        };
        let start = at(0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.offset_y, 10.0);

        let settled = at(60);
        assert!(settled.opacity > 0.999);
        assert!(settled.offset_y.abs() < 0.1);
    }

    #[test]
    fn test_carries_narration_text() {
        let elements = render("This PR refactors the auth flow.", 30, 30);
        assert!(matches!(
            &elements[0],
            Element::CaptionBox { text, background, .. }
                if text == "This PR refactors the auth flow." && *background == theme::CAPTION_BACKDROP
        ));
    }
}
