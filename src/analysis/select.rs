use tracing::debug;

use super::types::DiffSample;
use crate::pr::types::DiffFile;

/// Extensions that mark a file as UI code. Checked before the general source
/// extensions so a small component edit outranks a large backend refactor.
const FRONTEND_EXTENSIONS: &[&str] = &[".tsx", ".jsx", ".vue", ".svelte"];

/// General source extensions, the second tier of the selection policy.
const SOURCE_EXTENSIONS: &[&str] = &[".ts", ".js", ".py", ".go", ".rs"];

/// Upper bound on sample lines shown in the diff segment.
const MAX_SAMPLE_LINES: usize = 20;

/// Pick the single most interesting file of the PR.
///
/// Files are ranked by total churn (descending, stable so equal-churn files
/// keep diff order), then the first frontend file wins, then the first general
/// source file, then the top of the ranking.
pub fn select_key_file(files: &[DiffFile]) -> Option<&DiffFile> {
    let mut ranked: Vec<&DiffFile> = files.iter().collect();
    ranked.sort_by(|a, b| b.total_changes().cmp(&a.total_changes()));

    let frontend = ranked
        .iter()
        .find(|f| FRONTEND_EXTENSIONS.iter().any(|ext| f.path().ends_with(ext)))
        .copied();
    if let Some(file) = frontend {
        debug!(path = file.path(), "selected frontend key file");
        return Some(file);
    }

    let source = ranked
        .iter()
        .find(|f| SOURCE_EXTENSIONS.iter().any(|ext| f.path().ends_with(ext)))
        .copied();
    if let Some(file) = source {
        debug!(path = file.path(), "selected source key file");
        return Some(file);
    }

    ranked.first().copied()
}

/// Extract the excerpt shown in the diff segment: the first hunk of the key
/// file, capped at 20 lines. `None` (or a hunkless file, e.g. a pure rename)
/// produces an empty sample under the name "unknown".
pub fn extract_diff_sample(file: Option<&DiffFile>) -> DiffSample {
    let file = match file {
        Some(file) if !file.hunks.is_empty() => file,
        _ => {
            return DiffSample {
                file_name: "unknown".to_string(),
                lines: Vec::new(),
            }
        }
    };

    let lines = file.hunks[0]
        .lines
        .iter()
        .take(MAX_SAMPLE_LINES)
        .cloned()
        .collect();

    DiffSample {
        file_name: file.path().to_string(),
        lines,
    }
}
