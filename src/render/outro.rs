use super::anim::{interpolate, spring};
use super::frame::{Element, Style};
use super::theme;

/// Closing card: PR number and author fading in together.
pub fn render(pr_number: u64, author: &str, local_frame: i64, fps: u32) -> Vec<Element> {
    let entry = spring(local_frame, fps, 15.0);
    let style = Style {
        opacity: interpolate(entry, [0.0, 1.0], [0.0, 1.0]),
        ..Style::default()
    };

    vec![
        Element::Text {
            id: "outro.pr",
            content: format!("PR #{}", pr_number),
            color: theme::SUCCESS,
            font_size: 32,
            style,
        },
        Element::Text {
            id: "outro.author",
            content: format!("by {}", author),
            color: theme::TEXT_MUTED,
            font_size: 18,
            style,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_carry_pr_and_author() {
        let elements = render(42, "johndoe", 30, 30);
        assert!(elements.iter().any(|e| matches!(
            e,
            Element::Text { id: "outro.pr", content, color, .. }
                if content == "PR #42" && *color == theme::SUCCESS
        )));
        assert!(elements.iter().any(|e| matches!(
            e,
            Element::Text { id: "outro.author", content, .. } if content == "by johndoe"
        )));
    }

    #[test]
    fn test_fades_in_from_zero() {
        let at = |frame| match &render(42, "johndoe", frame, 30)[0] {
            Element::Text { style, .. } => *style,
            _ => panic!("expected text element"),
        };
        assert_eq!(at(0).opacity, 0.0);
        assert!(at(20).opacity > 0.9);
    }
}
