pub mod types;

pub use types::{SegmentPayload, TimelineSegment};

use tracing::debug;

use crate::analysis::types::PrAnalysis;

const INTRO_SECONDS: u32 = 2;
const FILE_LIST_SECONDS: u32 = 3;
const DIFF_SECONDS: u32 = 5;
const DEMO_SECONDS: u32 = 10;
const STATS_SECONDS: u32 = 3;
const OUTRO_SECONDS: u32 = 2;

/// The file list segment shows at most this many rows.
const MAX_FILE_ROWS: usize = 8;

/// The diff segment shows at most this many lines.
const MAX_DIFF_LINES: usize = 15;

/// Compute the frame-accurate schedule for one video.
///
/// Body segments (Intro, FileList, Diff or Demo, Stats) are laid out
/// contiguously from frame 0. The Outro is anchored backward from
/// `total_frames` regardless of where the body ends, and the Caption overlay
/// spans from the end of the Intro to the start of the Outro, shrinking when
/// `total_frames` is small. Exactly one of Diff/Demo is scheduled, picked by
/// whether a recording reference was supplied.
///
/// Pure and total for valid input; `fps` and `total_frames` must be positive
/// (callers validate user input before it reaches this point).
pub fn compose(
    analysis: &PrAnalysis,
    recording: Option<&str>,
    fps: u32,
    total_frames: u32,
) -> Vec<TimelineSegment> {
    assert!(fps > 0, "fps must be positive");
    assert!(total_frames > 0, "total_frames must be positive");

    let intro = INTRO_SECONDS * fps;
    let file_list = FILE_LIST_SECONDS * fps;
    let stats = STATS_SECONDS * fps;
    let outro = OUTRO_SECONDS * fps;

    let mut segments = Vec::with_capacity(6);
    let mut cursor = 0u32;

    segments.push(TimelineSegment {
        name: "intro",
        start_frame: cursor,
        duration_frames: intro,
        payload: SegmentPayload::Intro {
            title: analysis.title.clone(),
            repo: analysis.repo.clone(),
            pr_number: analysis.number,
        },
    });
    cursor += intro;

    segments.push(TimelineSegment {
        name: "fileList",
        start_frame: cursor,
        duration_frames: file_list,
        payload: SegmentPayload::FileList {
            files: analysis.files.iter().take(MAX_FILE_ROWS).cloned().collect(),
        },
    });
    cursor += file_list;

    match recording {
        Some(src) => {
            let demo = DEMO_SECONDS * fps;
            segments.push(TimelineSegment {
                name: "demo",
                start_frame: cursor,
                duration_frames: demo,
                payload: SegmentPayload::Demo {
                    src: src.to_string(),
                },
            });
            cursor += demo;
        }
        None => {
            let diff = DIFF_SECONDS * fps;
            segments.push(TimelineSegment {
                name: "diff",
                start_frame: cursor,
                duration_frames: diff,
                payload: SegmentPayload::Diff {
                    file_name: analysis.diff_sample.file_name.clone(),
                    lines: analysis
                        .diff_sample
                        .lines
                        .iter()
                        .take(MAX_DIFF_LINES)
                        .cloned()
                        .collect(),
                },
            });
            cursor += diff;
        }
    }

    // Stats may land past total_frames on short videos with a long demo;
    // it is scheduled anyway and simply never becomes active. Order is
    // never rearranged to make it fit.
    segments.push(TimelineSegment {
        name: "stats",
        start_frame: cursor,
        duration_frames: stats,
        payload: SegmentPayload::Stats {
            additions: analysis.additions,
            deletions: analysis.deletions,
            files_changed: analysis.files.len(),
        },
    });

    let outro_start = total_frames.saturating_sub(outro);
    segments.push(TimelineSegment {
        name: "outro",
        start_frame: outro_start,
        duration_frames: outro,
        payload: SegmentPayload::Outro {
            pr_number: analysis.number,
            author: analysis.author.clone(),
        },
    });

    // Caption overlays the body; declared last so it renders on top.
    let caption_start = intro;
    let caption_duration = outro_start.saturating_sub(caption_start);
    segments.push(TimelineSegment {
        name: "caption",
        start_frame: caption_start,
        duration_frames: caption_duration,
        payload: SegmentPayload::Caption {
            text: analysis.narration.clone(),
        },
    });

    debug!(
        segments = segments.len(),
        total_frames,
        demo = recording.is_some(),
        "composed timeline"
    );
    segments
}
