use super::anim::{interpolate, spring};
use super::frame::{Element, Style};
use super::theme;

/// Additional frames of delay per card index.
const CARD_STAGGER: i64 = 8;

/// Three summary cards popping in left to right, each counting its value up
/// from zero over the first second after its own delay.
pub fn render(additions: usize, deletions: usize, files_changed: usize, local_frame: i64, fps: u32) -> Vec<Element> {
    let cards: [(&'static str, usize, &'static str, &'static str); 3] = [
        ("Files Changed", files_changed, "", theme::ACCENT),
        ("Additions", additions, "+", theme::SUCCESS),
        ("Deletions", deletions, "-", theme::DANGER),
    ];

    cards
        .into_iter()
        .enumerate()
        .map(|(i, (label, value, prefix, color))| {
            let delay = CARD_STAGGER * i as i64;
            let pop = spring(local_frame - delay, fps, 12.0);
            let progress = interpolate(
                (local_frame - delay) as f64,
                [0.0, f64::from(fps)],
                [0.0, 1.0],
            );
            let shown = (value as f64 * progress).round() as usize;
            Element::StatCard {
                label,
                display_value: format!("{}{}", prefix, shown),
                color,
                style: Style {
                    opacity: interpolate(pop, [0.0, 1.0], [0.0, 1.0]),
                    scale: interpolate(pop, [0.0, 1.0], [0.5, 1.0]),
                    offset_y: interpolate(pop, [0.0, 1.0], [20.0, 0.0]),
                    ..Style::default()
                },
            }
        })
        .collect()
}
