//! Pure frame renderer: turns a schedule plus a frame number into a flat
//! list of styled visual elements. All animation state is recomputed from
//! the frame number, so any frame can be produced in isolation and in any
//! order.

pub mod anim;
mod caption;
mod demo;
mod diff_view;
mod file_list;
pub mod frame;
mod intro;
mod outro;
mod stats;
pub mod theme;

pub use frame::{Element, FrameDesc, Style};

use crate::timeline::types::{SegmentPayload, TimelineSegment};

/// Renders one frame of the video by evaluating every segment active at
/// `frame`. Elements are emitted in schedule order, so the caption (declared
/// last) paints over the scene beneath it.
pub fn render_frame(segments: &[TimelineSegment], frame: u32, fps: u32) -> FrameDesc {
    let mut elements = Vec::new();

    for segment in segments.iter().filter(|s| s.contains(frame)) {
        let local = i64::from(frame) - i64::from(segment.start_frame);
        let rendered = match &segment.payload {
            SegmentPayload::Intro {
                title,
                repo,
                pr_number,
            } => intro::render(title, repo, *pr_number, local, fps),
            SegmentPayload::FileList { files } => file_list::render(files, local, fps),
            SegmentPayload::Diff { file_name, lines } => {
                diff_view::render(file_name, lines, local, fps)
            }
            SegmentPayload::Demo { src } => demo::render(src, local, segment.duration_frames, fps),
            SegmentPayload::Stats {
                additions,
                deletions,
                files_changed,
            } => stats::render(*additions, *deletions, *files_changed, local, fps),
            SegmentPayload::Outro { pr_number, author } => {
                outro::render(*pr_number, author, local, fps)
            }
            SegmentPayload::Caption { text } => caption::render(text, local, fps),
        };
        elements.extend(rendered);
    }

    FrameDesc {
        frame,
        background: theme::BACKGROUND,
        elements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{DiffSample, FileChange, PrAnalysis};
    use crate::pr::types::{DiffLine, FileStatus, LineKind};
    use crate::timeline::compose;

    fn analysis() -> PrAnalysis {
        PrAnalysis {
            title: "Add auth".to_string(),
            number: 42,
            repo: "acme/web-app".to_string(),
            author: "johndoe".to_string(),
            is_frontend: true,
            narration: "Adds a login flow.".to_string(),
            key_files: vec!["src/LoginForm.tsx".to_string()],
            additions: 85,
            deletions: 15,
            files: vec![FileChange {
                path: "src/LoginForm.tsx".to_string(),
                additions: 85,
                deletions: 15,
                status: FileStatus::Added,
            }],
            diff_sample: DiffSample {
                file_name: "src/LoginForm.tsx".to_string(),
                lines: vec![DiffLine {
                    kind: LineKind::Addition,
                    content: "export function LoginForm() {".to_string(),
                    line_number: Some(1),
                }],
            },
        }
    }

    fn kinds(desc: &FrameDesc) -> Vec<&'static str> {
        desc.elements
            .iter()
            .map(|e| match e {
                Element::Panel { .. } => "panel",
                Element::Text { .. } => "text",
                Element::FileRow { .. } => "fileRow",
                Element::DiffRow { .. } => "diffRow",
                Element::StatCard { .. } => "statCard",
                Element::Video { .. } => "video",
                Element::CaptionBox { .. } => "captionBox",
            })
            .collect()
    }

    #[test]
    fn test_frame_zero_shows_only_the_intro() {
        let segments = compose(&analysis(), None, 30, 450);
        let desc = render_frame(&segments, 0, 30);
        assert_eq!(desc.frame, 0);
        assert_eq!(desc.background, theme::BACKGROUND);
        let kinds = kinds(&desc);
        assert!(kinds.contains(&"text"));
        assert!(!kinds.contains(&"captionBox"));
        assert!(!kinds.contains(&"fileRow"));
    }

    #[test]
    fn test_file_list_frames_layer_caption_on_top() {
        let segments = compose(&analysis(), None, 30, 450);
        let desc = render_frame(&segments, 100, 30);
        let kinds = kinds(&desc);
        assert!(kinds.contains(&"fileRow"));
        assert_eq!(kinds.last(), Some(&"captionBox"));
    }

    #[test]
    fn test_diff_frames_carry_diff_rows() {
        let segments = compose(&analysis(), None, 30, 450);
        let desc = render_frame(&segments, 200, 30);
        let kinds = kinds(&desc);
        assert!(kinds.contains(&"diffRow"));
        assert!(!kinds.contains(&"video"));
        assert_eq!(kinds.last(), Some(&"captionBox"));
    }

    #[test]
    fn test_recording_swaps_diff_for_video() {
        let segments = compose(&analysis(), Some("demo.webm"), 30, 600);
        let desc = render_frame(&segments, 200, 30);
        let kinds = kinds(&desc);
        assert!(kinds.contains(&"video"));
        assert!(!kinds.contains(&"diffRow"));
    }

    #[test]
    fn test_final_frames_show_only_the_outro() {
        let segments = compose(&analysis(), None, 30, 450);
        let desc = render_frame(&segments, 420, 30);
        let ids: Vec<_> = desc
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Text { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec!["outro.pr", "outro.author"]);
        assert!(!kinds(&desc).contains(&"captionBox"));
    }

    #[test]
    fn test_caption_enters_with_the_file_list() {
        // The caption window opens at frame 60; its entry spring starts there.
        let segments = compose(&analysis(), None, 30, 450);
        let desc = render_frame(&segments, 60, 30);
        let caption = desc
            .elements
            .iter()
            .find_map(|e| match e {
                Element::CaptionBox { style, .. } => Some(*style),
                _ => None,
            })
            .unwrap();
        assert_eq!(caption.opacity, 0.0);
    }

    #[test]
    fn test_same_frame_renders_identically() {
        let segments = compose(&analysis(), None, 30, 450);
        let a = serde_json::to_string(&render_frame(&segments, 137, 30)).unwrap();
        let b = serde_json::to_string(&render_frame(&segments, 137, 30)).unwrap();
        assert_eq!(a, b);
    }
}
