use super::types::{DiffFile, DiffLine, Hunk, LineKind};
use super::PrError;

/// Parse a unified diff string into a vector of DiffFile structs.
///
/// The input is the raw text from GitHub's diff endpoint.
///
/// Each file section starts with:
///   diff --git a/{path} b/{path}
///
/// New files have: `--- /dev/null`
/// Deleted files have: `+++ /dev/null`
/// Renames may carry `rename from` / `rename to` headers and no hunks at all.
///
/// Hunks start with: @@ -{old_start},{old_count} +{new_start},{new_count} @@
///
/// Lines are prefixed with '+' for additions, '-' for deletions, ' ' for
/// context. The marker is stripped and each line is recorded with its
/// post-image number (additions, context) or pre-image number (deletions).
///
/// Fails with `PrError::DiffParse` when the input cannot be split into file
/// sections, so "no diff" is signaled upstream instead of producing an empty
/// analysis.
pub fn parse_diff(raw_diff: &str) -> Result<Vec<DiffFile>, PrError> {
    let mut files: Vec<DiffFile> = Vec::new();
    let mut current_file: Option<DiffFile> = None;
    let mut current_hunk: Option<Hunk> = None;
    let mut old_line = 0usize;
    let mut new_line = 0usize;

    let finish_hunk = |file: &mut Option<DiffFile>, hunk: &mut Option<Hunk>| {
        if let (Some(file), Some(hunk)) = (file.as_mut(), hunk.take()) {
            file.hunks.push(hunk);
        }
    };

    let finish_file =
        |files: &mut Vec<DiffFile>, file: &mut Option<DiffFile>, hunk: &mut Option<Hunk>| {
            finish_hunk(file, hunk);
            if let Some(file) = file.take() {
                files.push(file);
            }
        };

    for line in raw_diff.lines() {
        if let Some(rest) = line.strip_prefix("diff --git ") {
            finish_file(&mut files, &mut current_file, &mut current_hunk);
            let (old_path, new_path) = parse_git_header(rest)?;
            current_file = Some(DiffFile {
                old_path: Some(old_path),
                new_path: Some(new_path),
                additions: 0,
                deletions: 0,
                hunks: Vec::new(),
            });
            continue;
        }

        if current_file.is_none() {
            // Preamble before the first file section (e.g. patch mail headers).
            continue;
        }

        if line.starts_with("@@") {
            finish_hunk(&mut current_file, &mut current_hunk);
            let (old_start, old_count, new_start, new_count) = parse_hunk_header(line)?;
            old_line = old_start;
            new_line = new_start;
            current_hunk = Some(Hunk {
                old_start,
                old_count,
                new_start,
                new_count,
                lines: Vec::new(),
            });
            continue;
        }

        // Between the diff header and the first hunk only file headers appear;
        // inside a hunk, lines starting with "---"/"+++" are deletion/addition
        // content and must not be re-read as headers.
        if current_hunk.is_none() {
            if let Some(file) = current_file.as_mut() {
                if let Some(path) = line.strip_prefix("--- ") {
                    file.old_path = parse_marker_path(path, "a/");
                } else if let Some(path) = line.strip_prefix("+++ ") {
                    file.new_path = parse_marker_path(path, "b/");
                } else if let Some(path) = line.strip_prefix("rename from ") {
                    file.old_path = Some(path.trim().to_string());
                } else if let Some(path) = line.strip_prefix("rename to ") {
                    file.new_path = Some(path.trim().to_string());
                }
            }
            continue;
        }

        if let (Some(file), Some(hunk)) = (current_file.as_mut(), current_hunk.as_mut()) {
            if line.starts_with('\\') {
                // "\ No newline at end of file" carries no line record.
                continue;
            }
            let record = if let Some(content) = line.strip_prefix('+') {
                file.additions += 1;
                let number = new_line;
                new_line += 1;
                DiffLine {
                    kind: LineKind::Addition,
                    content: content.to_string(),
                    line_number: Some(number),
                }
            } else if let Some(content) = line.strip_prefix('-') {
                file.deletions += 1;
                let number = old_line;
                old_line += 1;
                DiffLine {
                    kind: LineKind::Deletion,
                    content: content.to_string(),
                    line_number: Some(number),
                }
            } else if let Some(content) = line.strip_prefix(' ') {
                let number = new_line;
                old_line += 1;
                new_line += 1;
                DiffLine {
                    kind: LineKind::Context,
                    content: content.to_string(),
                    line_number: Some(number),
                }
            } else {
                continue;
            };
            hunk.lines.push(record);
        }
    }

    finish_file(&mut files, &mut current_file, &mut current_hunk);

    if files.is_empty() {
        return Err(PrError::DiffParse(
            "no file sections found in diff".to_string(),
        ));
    }
    Ok(files)
}

/// Split the `a/{path} b/{path}` remainder of a `diff --git` header.
fn parse_git_header(rest: &str) -> Result<(String, String), PrError> {
    let mut parts = rest.split_whitespace();
    let a_path = parts
        .next()
        .ok_or_else(|| PrError::DiffParse("missing a/ path in diff header".to_string()))?;
    let b_path = parts
        .next()
        .ok_or_else(|| PrError::DiffParse("missing b/ path in diff header".to_string()))?;
    let a_path = a_path.strip_prefix("a/").unwrap_or(a_path).to_string();
    let b_path = b_path.strip_prefix("b/").unwrap_or(b_path).to_string();
    Ok((a_path, b_path))
}

/// Read the path from a `---`/`+++` header; `/dev/null` means the file does
/// not exist on that side.
fn parse_marker_path(raw: &str, prefix: &str) -> Option<String> {
    let path = raw.split('\t').next().unwrap_or(raw).trim();
    if path == "/dev/null" {
        return None;
    }
    let path = path.strip_prefix(prefix).unwrap_or(path);
    Some(path.to_string())
}

fn parse_hunk_header(line: &str) -> Result<(usize, usize, usize, usize), PrError> {
    let header = line
        .trim()
        .strip_prefix("@@")
        .ok_or_else(|| PrError::DiffParse("invalid hunk header".to_string()))?
        .trim();
    let header = match header.split_once("@@") {
        Some((ranges, _section)) => ranges.trim(),
        None => header.trim_end_matches("@@").trim(),
    };
    let mut parts = header.split_whitespace();
    let old_part = parts
        .next()
        .ok_or_else(|| PrError::DiffParse("missing old range in hunk header".to_string()))?;
    let new_part = parts
        .next()
        .ok_or_else(|| PrError::DiffParse("missing new range in hunk header".to_string()))?;

    let (old_start, old_count) = parse_range(old_part, '-')?;
    let (new_start, new_count) = parse_range(new_part, '+')?;

    Ok((old_start, old_count, new_start, new_count))
}

fn parse_range(part: &str, prefix: char) -> Result<(usize, usize), PrError> {
    let range = part
        .strip_prefix(prefix)
        .ok_or_else(|| PrError::DiffParse("invalid range prefix in hunk header".to_string()))?;
    let (start_str, count_str) = match range.split_once(',') {
        Some((start, count)) => (start, count),
        None => (range, "1"),
    };
    let start = start_str
        .parse::<usize>()
        .map_err(|_| PrError::DiffParse(format!("invalid range start in {}", part)))?;
    let count = count_str
        .parse::<usize>()
        .map_err(|_| PrError::DiffParse(format!("invalid range count in {}", part)))?;
    Ok((start, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pr::types::FileStatus;

    const SAMPLE_DIFF: &str = r#"diff --git a/src/main.rs b/src/main.rs
index abc1234..def5678 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,4 @@
 fn main() {
-    println!("old");
+    println!("new");
+    // Added a comment
 }
"#;

    #[test]
    fn test_parse_single_file_diff() {
        let files = parse_diff(SAMPLE_DIFF).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path(), "src/main.rs");
        assert_eq!(files[0].additions, 2);
        assert_eq!(files[0].deletions, 1);
        assert_eq!(files[0].status(), FileStatus::Modified);
    }

    #[test]
    fn test_markers_are_stripped_and_typed() {
        let files = parse_diff(SAMPLE_DIFF).unwrap();
        let lines = &files[0].hunks[0].lines;
        assert_eq!(lines[0].kind, LineKind::Context);
        assert_eq!(lines[0].content, "fn main() {");
        assert_eq!(lines[1].kind, LineKind::Deletion);
        assert_eq!(lines[1].content, "    println!(\"old\");");
        assert_eq!(lines[2].kind, LineKind::Addition);
        assert_eq!(lines[2].content, "    println!(\"new\");");
    }

    #[test]
    fn test_line_numbers_follow_image_sides() {
        let files = parse_diff(SAMPLE_DIFF).unwrap();
        let lines = &files[0].hunks[0].lines;
        // Context and additions carry post-image numbers, deletions pre-image.
        assert_eq!(lines[0].line_number, Some(1)); // " fn main() {"
        assert_eq!(lines[1].line_number, Some(2)); // "-println!(old)" old side
        assert_eq!(lines[2].line_number, Some(2)); // "+println!(new)" new side
        assert_eq!(lines[3].line_number, Some(3)); // "+// Added a comment"
        assert_eq!(lines[4].line_number, Some(4)); // " }"
    }

    #[test]
    fn test_parse_new_file_diff() {
        let diff = r#"diff --git a/new_file.txt b/new_file.txt
new file mode 100644
index 0000000..e69de29
--- /dev/null
+++ b/new_file.txt
@@ -0,0 +1,2 @@
+hello
+world
"#;
        let files = parse_diff(diff).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].status(), FileStatus::Added);
        assert!(files[0].old_path.is_none());
        assert_eq!(files[0].additions, 2);
    }

    #[test]
    fn test_parse_deleted_file_diff() {
        let diff = r#"diff --git a/old_file.txt b/old_file.txt
deleted file mode 100644
index e69de29..0000000
--- a/old_file.txt
+++ /dev/null
@@ -1,2 +0,0 @@
-hello
-world
"#;
        let files = parse_diff(diff).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].status(), FileStatus::Deleted);
        assert!(files[0].new_path.is_none());
        assert_eq!(files[0].deletions, 2);
    }

    #[test]
    fn test_parse_pure_rename_without_hunks() {
        let diff = r#"diff --git a/old_name.rs b/new_name.rs
similarity index 100%
rename from old_name.rs
rename to new_name.rs
"#;
        let files = parse_diff(diff).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].status(), FileStatus::Renamed);
        assert_eq!(files[0].path(), "new_name.rs");
        assert!(files[0].hunks.is_empty());
    }

    #[test]
    fn test_parse_empty_diff_is_an_error() {
        assert!(parse_diff("").is_err());
        assert!(parse_diff("   \n  ").is_err());
    }

    #[test]
    fn test_parse_without_file_sections_is_an_error() {
        let err = parse_diff("this is not a diff\njust some text\n").unwrap_err();
        assert!(err.to_string().contains("no file sections"));
    }

    #[test]
    fn test_per_file_counts_match_line_records() {
        let diff = r#"diff --git a/a.rs b/a.rs
--- a/a.rs
+++ b/a.rs
@@ -1,2 +1,3 @@
 context
-removed
+added one
+added two
@@ -10,1 +11,2 @@
 more context
+tail
diff --git a/b.py b/b.py
--- a/b.py
+++ b/b.py
@@ -5,2 +5,1 @@
-gone
-also gone
+kept
"#;
        let files = parse_diff(diff).unwrap();
        assert_eq!(files.len(), 2);
        for file in &files {
            let added = file
                .hunks
                .iter()
                .flat_map(|h| &h.lines)
                .filter(|l| l.kind == LineKind::Addition)
                .count();
            let removed = file
                .hunks
                .iter()
                .flat_map(|h| &h.lines)
                .filter(|l| l.kind == LineKind::Deletion)
                .count();
            assert_eq!(file.additions, added);
            assert_eq!(file.deletions, removed);
        }
        assert_eq!(files[0].additions, 3);
        assert_eq!(files[0].deletions, 1);
        assert_eq!(files[1].additions, 1);
        assert_eq!(files[1].deletions, 2);
    }

    #[test]
    fn test_hunk_section_header_is_tolerated() {
        let diff = r#"diff --git a/src/lib.rs b/src/lib.rs
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -10,2 +10,2 @@ impl Foo {
     fn bar(&self) {
-        old();
+        new();
"#;
        let files = parse_diff(diff).unwrap();
        let hunk = &files[0].hunks[0];
        assert_eq!(hunk.old_start, 10);
        assert_eq!(hunk.new_start, 10);
        assert_eq!(hunk.lines.len(), 3);
    }
}
