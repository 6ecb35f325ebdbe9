use serde::Serialize;

use crate::analysis::types::FileChange;
use crate::pr::types::DiffLine;

/// One scheduled slice of the output video: a half-open frame range plus the
/// payload its renderer consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    pub name: &'static str,
    pub start_frame: u32,
    pub duration_frames: u32,
    pub payload: SegmentPayload,
}

impl TimelineSegment {
    /// End of the segment's half-open frame range.
    pub fn end_frame(&self) -> u32 {
        self.start_frame + self.duration_frames
    }

    /// Whether `frame` falls inside `[start_frame, end_frame)`.
    pub fn contains(&self, frame: u32) -> bool {
        frame >= self.start_frame && frame < self.end_frame()
    }
}

/// Segment-local props, tagged so the renderer dispatches exhaustively over
/// the closed set of visuals instead of probing nullable fields.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SegmentPayload {
    #[serde(rename_all = "camelCase")]
    Intro {
        title: String,
        repo: String,
        pr_number: u64,
    },
    FileList {
        files: Vec<FileChange>,
    },
    #[serde(rename_all = "camelCase")]
    Diff {
        file_name: String,
        lines: Vec<DiffLine>,
    },
    Demo {
        src: String,
    },
    #[serde(rename_all = "camelCase")]
    Stats {
        additions: usize,
        deletions: usize,
        files_changed: usize,
    },
    #[serde(rename_all = "camelCase")]
    Outro {
        pr_number: u64,
        author: String,
    },
    Caption {
        text: String,
    },
}
