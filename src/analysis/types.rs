use serde::Serialize;

use crate::pr::types::{DiffFile, DiffLine, FileStatus};

/// Per-file change summary carried through analysis and into the video.
#[derive(Debug, Clone, Serialize)]
pub struct FileChange {
    pub path: String,
    pub additions: usize,
    pub deletions: usize,
    pub status: FileStatus,
}

impl From<&DiffFile> for FileChange {
    fn from(file: &DiffFile) -> Self {
        FileChange {
            path: file.path().to_string(),
            additions: file.additions,
            deletions: file.deletions,
            status: file.status(),
        }
    }
}

/// A short excerpt of the key file's diff, shown line by line in the video.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSample {
    pub file_name: String,
    pub lines: Vec<DiffLine>,
}

/// Everything the timeline needs to know about a pull request.
///
/// Field names serialize in camelCase so `analyze` output stays readable for
/// the same front-end tooling that consumes GitHub's own API payloads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrAnalysis {
    pub title: String,
    pub number: u64,
    pub repo: String,
    pub author: String,
    pub is_frontend: bool,
    pub narration: String,
    pub key_files: Vec<String>,
    pub additions: usize,
    pub deletions: usize,
    pub files: Vec<FileChange>,
    pub diff_sample: DiffSample,
}
