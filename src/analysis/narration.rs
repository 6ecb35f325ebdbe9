use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::types::FileChange;
use crate::config::Config;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_COMPLETION_TOKENS: u32 = 500;

/// The prompt carries at most this much raw diff text.
const MAX_PROMPT_DIFF_BYTES: usize = 4000;

/// Extensions that count as frontend for the local fallback. Stylesheets are
/// included here but not in key-file selection: a CSS-only PR is a frontend
/// change even though a stylesheet makes a poor diff sample.
const FRONTEND_EXTENSIONS: &[&str] = &[".tsx", ".jsx", ".vue", ".svelte", ".css", ".scss"];

#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("Anthropic API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Anthropic API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Anthropic API key not found in environment")]
    MissingKey,

    #[error("Model response contained no text block")]
    EmptyResponse,
}

/// The structured judgment requested from the model. Parsed leniently:
/// missing fields default, extra fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiAnalysis {
    pub is_frontend: bool,
    pub narration: String,
    pub key_files: Vec<String>,
}

/// Narrative fields for the video, tagged with where they came from so tests
/// and callers can tell the model path from the local heuristic.
#[derive(Debug, Clone)]
pub enum Narration {
    Model(AiAnalysis),
    Fallback(AiAnalysis),
}

impl Narration {
    pub fn into_inner(self) -> AiAnalysis {
        match self {
            Narration::Model(inner) | Narration::Fallback(inner) => inner,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Narration::Fallback(_))
    }
}

/// Inputs the narration prompt is built from.
pub struct NarrationContext<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub files: &'a [FileChange],
    pub diff: &'a str,
}

/// A text-generation endpoint that can answer the narration prompt.
/// Implementations must be Send + Sync so the pipeline stays spawnable.
#[async_trait]
pub trait NarrationBackend: Send + Sync {
    /// Single-turn completion for the given prompt, returning raw text.
    async fn complete(&self, prompt: &str) -> Result<String, NarrationError>;
}

/// Anthropic Messages API client.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    pub fn from_config(config: &Config) -> Result<Self, NarrationError> {
        let api_key = config
            .anthropic_api_key()
            .ok_or(NarrationError::MissingKey)?;
        Ok(AnthropicClient {
            client: reqwest::Client::new(),
            api_key,
            model: config.anthropic.model.clone(),
        })
    }
}

#[async_trait]
impl NarrationBackend for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<String, NarrationError> {
        #[derive(Serialize)]
        struct Message<'a> {
            role: &'a str,
            content: &'a str,
        }

        #[derive(Serialize)]
        struct MessagesRequest<'a> {
            model: &'a str,
            max_tokens: u32,
            messages: Vec<Message<'a>>,
        }

        #[derive(Deserialize)]
        struct ContentBlock {
            #[serde(rename = "type")]
            kind: String,
            #[serde(default)]
            text: String,
        }

        #[derive(Deserialize)]
        struct MessagesResponse {
            content: Vec<ContentBlock>,
        }

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_COMPLETION_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, "requesting narration from Anthropic API");
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NarrationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<MessagesResponse>().await?;
        parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text)
            .ok_or(NarrationError::EmptyResponse)
    }
}

/// Ask the backend to classify and narrate the PR; on any failure (no backend
/// configured, request error, unusable response text) substitute the local
/// heuristic. This function never fails: the pipeline always gets narrative
/// fields once diff parsing succeeded.
pub async fn synthesize(
    backend: Option<&dyn NarrationBackend>,
    context: &NarrationContext<'_>,
) -> Narration {
    let backend = match backend {
        Some(backend) => backend,
        None => {
            warn!("no narration backend configured, using local fallback");
            return Narration::Fallback(fallback_analysis(context));
        }
    };

    let prompt = build_prompt(context);
    let text = match backend.complete(&prompt).await {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "narration request failed, using local fallback");
            return Narration::Fallback(fallback_analysis(context));
        }
    };

    match extract_json_object(&text).map(serde_json::from_str::<AiAnalysis>) {
        Some(Ok(analysis)) => Narration::Model(analysis),
        Some(Err(err)) => {
            warn!(error = %err, "model JSON did not parse, using local fallback");
            Narration::Fallback(fallback_analysis(context))
        }
        None => {
            warn!("no JSON object in model response, using local fallback");
            Narration::Fallback(fallback_analysis(context))
        }
    }
}

/// Deterministic substitute when the model is unavailable: extension check
/// for the frontend flag, a templated sentence, the first three file paths.
fn fallback_analysis(context: &NarrationContext<'_>) -> AiAnalysis {
    let is_frontend = context.files.iter().any(|f| {
        FRONTEND_EXTENSIONS
            .iter()
            .any(|ext| f.path.ends_with(ext))
    });
    let additions: usize = context.files.iter().map(|f| f.additions).sum();

    AiAnalysis {
        is_frontend,
        narration: format!(
            "This PR \"{}\" modifies {} files with {} additions.",
            context.title,
            context.files.len(),
            additions
        ),
        key_files: context
            .files
            .iter()
            .take(3)
            .map(|f| f.path.clone())
            .collect(),
    }
}

fn build_prompt(context: &NarrationContext<'_>) -> String {
    let description = if context.body.is_empty() {
        "No description"
    } else {
        context.body
    };
    let files = context
        .files
        .iter()
        .map(|f| format!("- {} (+{}/-{})", f.path, f.additions, f.deletions))
        .collect::<Vec<_>>()
        .join("\n");
    let excerpt = truncate_to_boundary(context.diff, MAX_PROMPT_DIFF_BYTES);

    format!(
        "Analyze this pull request and provide:
1. Is this primarily a frontend change? (true/false)
2. A 2-3 sentence narration explaining what this PR does (for a video caption)
3. The 2-3 most important files changed

PR Title: {title}
PR Description: {description}

Files changed:
{files}

Diff sample:
```
{excerpt}
```

Respond in JSON format:
{{
  \"isFrontend\": boolean,
  \"narration\": \"string\",
  \"keyFiles\": [\"file1\", \"file2\"]
}}",
        title = context.title,
        description = description,
        files = files,
        excerpt = excerpt,
    )
}

/// Cut `text` to at most `max_bytes`, backing off to a char boundary so the
/// slice stays valid UTF-8.
fn truncate_to_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Find the first balanced JSON object substring in free-form model output.
/// Models wrap their JSON in prose or code fences; brace counting that honors
/// string literals and escapes is enough to dig the object out.
fn extract_json_object(text: &str) -> Option<&str> {
    text.char_indices()
        .filter(|(_, c)| *c == '{')
        .find_map(|(start, _)| balanced_prefix(&text[start..]))
}

/// The prefix of `text` forming one balanced JSON object, if its braces
/// close. Braces inside quoted strings do not count toward depth.
fn balanced_prefix(text: &str) -> Option<&str> {
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..=i]);
                }
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    None
}
