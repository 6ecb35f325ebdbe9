use super::anim::{interpolate, spring};
use super::frame::{Element, Style};
use super::theme;

/// The repo line and PR badge trail the title by this many frames.
const REPO_DELAY_FRAMES: i64 = 10;

/// Title card: the title scales in immediately, the repo line drops in from
/// above and the PR number badge fades with it.
pub fn render(title: &str, repo: &str, pr_number: u64, local_frame: i64, fps: u32) -> Vec<Element> {
    let title_spring = spring(local_frame, fps, 15.0);
    let repo_spring = spring(local_frame - REPO_DELAY_FRAMES, fps, 15.0);

    vec![
        Element::Text {
            id: "intro.repo",
            content: repo.to_string(),
            color: theme::TEXT_MUTED,
            font_size: 18,
            style: Style {
                opacity: interpolate(repo_spring, [0.0, 1.0], [0.0, 1.0]),
                offset_y: interpolate(repo_spring, [0.0, 1.0], [-20.0, 0.0]),
                ..Style::default()
            },
        },
        Element::Text {
            id: "intro.title",
            content: title.to_string(),
            color: theme::TEXT,
            font_size: 48,
            style: Style {
                opacity: interpolate(title_spring, [0.0, 1.0], [0.0, 1.0]),
                scale: interpolate(title_spring, [0.0, 1.0], [0.9, 1.0]),
                ..Style::default()
            },
        },
        Element::Text {
            id: "intro.badge",
            content: format!("#{}", pr_number),
            color: theme::WHITE,
            font_size: 16,
            style: Style {
                opacity: interpolate(repo_spring, [0.0, 1.0], [0.0, 1.0]),
                ..Style::default()
            },
        },
    ]
}
