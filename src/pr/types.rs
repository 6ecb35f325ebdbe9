use serde::Serialize;

/// A pull request fetched from the GitHub API: metadata plus the raw unified
/// diff text. Constructed manually from the GitHub API JSON response and the
/// `application/vnd.github.diff` response; parsing the diff happens downstream.
#[derive(Debug, Clone)]
pub struct PullRequest {
    /// PR number (e.g., 42)
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR description body (empty when the author left none)
    pub body: String,
    /// Author's GitHub login
    pub author: String,
    /// Repository identity as "owner/repo"
    pub repo: String,
    /// Raw unified diff for the whole PR
    pub diff: String,
}

/// A single file section within a unified diff.
#[derive(Debug, Clone)]
pub struct DiffFile {
    /// Path on the pre-image side; `None` for newly added files
    pub old_path: Option<String>,
    /// Path on the post-image side; `None` for deleted files
    pub new_path: Option<String>,
    /// Lines added in this file
    pub additions: usize,
    /// Lines deleted in this file
    pub deletions: usize,
    /// Hunks (contiguous changed regions)
    pub hunks: Vec<Hunk>,
}

impl DiffFile {
    /// Display path: the resulting path when the file still exists, the prior
    /// path for deletions.
    pub fn path(&self) -> &str {
        self.new_path
            .as_deref()
            .or(self.old_path.as_deref())
            .unwrap_or("unknown")
    }

    /// Classify the change from the pre/post paths. Computed, never asserted:
    /// no prior path means added, no resulting path means deleted, differing
    /// paths mean renamed, anything else is a modification.
    pub fn status(&self) -> FileStatus {
        match (&self.old_path, &self.new_path) {
            (None, _) => FileStatus::Added,
            (_, None) => FileStatus::Deleted,
            (Some(old), Some(new)) if old != new => FileStatus::Renamed,
            _ => FileStatus::Modified,
        }
    }

    /// Total churn, the sort key for key-file selection.
    pub fn total_changes(&self) -> usize {
        self.additions + self.deletions
    }
}

/// How a file changed between the pre- and post-image of the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStatus::Added => write!(f, "added"),
            FileStatus::Modified => write!(f, "modified"),
            FileStatus::Deleted => write!(f, "deleted"),
            FileStatus::Renamed => write!(f, "renamed"),
        }
    }
}

impl FileStatus {
    /// One-letter marker used in file rows (git status style).
    pub fn marker(&self) -> char {
        match self {
            FileStatus::Added => 'A',
            FileStatus::Modified => 'M',
            FileStatus::Deleted => 'D',
            FileStatus::Renamed => 'R',
        }
    }
}

/// A contiguous region of changes within a file, anchored to starting line
/// numbers in the pre- and post-image.
#[derive(Debug, Clone)]
pub struct Hunk {
    /// Starting line number in the old file
    pub old_start: usize,
    /// Number of lines in the old file
    pub old_count: usize,
    /// Starting line number in the new file
    pub new_start: usize,
    /// Number of lines in the new file
    pub new_count: usize,
    /// Typed line records in diff order
    pub lines: Vec<DiffLine>,
}

/// One line of a hunk with its marker stripped and typed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    /// Line content without the leading +/-/space marker
    pub content: String,
    /// Post-image line number for additions and context, pre-image number for
    /// deletions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    #[serde(rename = "add")]
    Addition,
    #[serde(rename = "remove")]
    Deletion,
    #[serde(rename = "context")]
    Context,
}

/// Represents the parsed components of a GitHub PR URL.
#[derive(Debug, Clone)]
pub struct PrUrl {
    pub owner: String,
    pub repo: String,
    pub pr_number: u64,
}
