pub mod narration;
pub mod select;
pub mod types;

pub use types::{DiffSample, FileChange, PrAnalysis};

use tracing::{debug, instrument};

use crate::pr::types::PullRequest;
use crate::pr::{diff, PrError};
use narration::{AiAnalysis, NarrationBackend, NarrationContext};

/// The analysis record never carries more key files than the video can show.
const MAX_KEY_FILES: usize = 3;

/// Run the analysis pipeline for one PR: parse the diff, pick and sample the
/// key file, synthesize narrative fields, and assemble the record the
/// timeline consumes.
///
/// Diff parse failures abort the whole analysis. Narration failures never
/// surface here; `synthesize` absorbs them into the local fallback.
#[instrument(skip(pr, backend), fields(pr = pr.number, repo = %pr.repo))]
pub async fn analyze_pull_request(
    pr: &PullRequest,
    backend: Option<&dyn NarrationBackend>,
) -> Result<PrAnalysis, PrError> {
    let parsed = diff::parse_diff(&pr.diff)?;
    let files: Vec<FileChange> = parsed.iter().map(FileChange::from).collect();
    debug!(files = files.len(), "parsed diff");

    let key_file = select::select_key_file(&parsed);
    let diff_sample = select::extract_diff_sample(key_file);
    debug!(sample_file = %diff_sample.file_name, sample_lines = diff_sample.lines.len(), "extracted diff sample");

    let context = NarrationContext {
        title: &pr.title,
        body: &pr.body,
        files: &files,
        diff: &pr.diff,
    };
    let narration = narration::synthesize(backend, &context).await;

    Ok(assemble(pr, files, diff_sample, narration.into_inner()))
}

/// Merge PR metadata, the full per-file list, the diff sample, and the
/// narrative fields into one record. Aggregate counts are sums over every
/// file; the sample covers one representative file only.
pub fn assemble(
    pr: &PullRequest,
    files: Vec<FileChange>,
    diff_sample: DiffSample,
    ai: AiAnalysis,
) -> PrAnalysis {
    let additions = files.iter().map(|f| f.additions).sum();
    let deletions = files.iter().map(|f| f.deletions).sum();
    let mut key_files = ai.key_files;
    key_files.truncate(MAX_KEY_FILES);

    PrAnalysis {
        title: pr.title.clone(),
        number: pr.number,
        repo: pr.repo.clone(),
        author: pr.author.clone(),
        is_frontend: ai.is_frontend,
        narration: ai.narration,
        key_files,
        additions,
        deletions,
        files,
        diff_sample,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use narration::NarrationError;

    /// Helper to create a PullRequest around a given raw diff.
    pub fn test_pull_request(diff: &str) -> PullRequest {
        PullRequest {
            number: 42,
            title: "Add auth".to_string(),
            body: String::new(),
            author: "johndoe".to_string(),
            repo: "acme/web-app".to_string(),
            diff: diff.to_string(),
        }
    }

    /// One added frontend file (+85) and one trimmed manifest (-15).
    fn auth_diff() -> String {
        let mut diff = String::from(
            "diff --git a/src/a.tsx b/src/a.tsx\n--- /dev/null\n+++ b/src/a.tsx\n@@ -0,0 +1,85 @@\n",
        );
        for i in 0..85 {
            diff.push_str(&format!("+line {}\n", i));
        }
        diff.push_str(
            "diff --git a/package.json b/package.json\n--- a/package.json\n+++ b/package.json\n@@ -1,15 +1,0 @@\n",
        );
        for i in 0..15 {
            diff.push_str(&format!("-\"dep-{}\": \"1.0.0\",\n", i));
        }
        diff
    }

    struct CannedBackend(&'static str);

    #[async_trait]
    impl NarrationBackend for CannedBackend {
        async fn complete(&self, _prompt: &str) -> Result<String, NarrationError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_analyze_end_to_end_without_backend() {
        let pr = test_pull_request(&auth_diff());
        let analysis = analyze_pull_request(&pr, None).await.unwrap();

        assert_eq!(analysis.title, "Add auth");
        assert_eq!(analysis.number, 42);
        assert_eq!(analysis.repo, "acme/web-app");
        assert_eq!(analysis.author, "johndoe");
        assert_eq!(analysis.additions, 85);
        assert_eq!(analysis.deletions, 15);
        assert_eq!(analysis.files.len(), 2);

        // The component file outranks the manifest for sampling.
        assert_eq!(analysis.diff_sample.file_name, "src/a.tsx");
        assert_eq!(analysis.diff_sample.lines.len(), 20);

        // Local fallback narration.
        assert!(analysis.is_frontend);
        assert_eq!(
            analysis.narration,
            "This PR \"Add auth\" modifies 2 files with 85 additions."
        );
        assert_eq!(analysis.key_files, vec!["src/a.tsx", "package.json"]);
    }

    #[tokio::test]
    async fn test_analyze_uses_model_fields_when_backend_answers() {
        let pr = test_pull_request(&auth_diff());
        let backend = CannedBackend(
            r#"{"isFrontend": true, "narration": "Introduces the login flow.", "keyFiles": ["src/a.tsx"]}"#,
        );
        let analysis = analyze_pull_request(&pr, Some(&backend)).await.unwrap();
        assert_eq!(analysis.narration, "Introduces the login flow.");
        assert_eq!(analysis.key_files, vec!["src/a.tsx"]);
        // Stats still come from the diff, not the model.
        assert_eq!(analysis.additions, 85);
        assert_eq!(analysis.deletions, 15);
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_diff() {
        let pr = test_pull_request("");
        let err = analyze_pull_request(&pr, None).await.unwrap_err();
        assert!(matches!(err, PrError::DiffParse(_)));
    }

    #[test]
    fn test_assemble_caps_key_files_at_three() {
        let pr = test_pull_request("unused");
        let ai = AiAnalysis {
            is_frontend: false,
            narration: "n".to_string(),
            key_files: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
        };
        let analysis = assemble(
            &pr,
            vec![],
            DiffSample {
                file_name: "unknown".to_string(),
                lines: vec![],
            },
            ai,
        );
        assert_eq!(analysis.key_files, vec!["a", "b", "c"]);
    }
}
