pub mod diff;
pub mod types;

pub use types::{PrUrl, PullRequest};

use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum PrError {
    #[error("GitHub API request failed: {0}")]
    ApiRequest(#[from] reqwest::Error),

    #[error("Invalid PR URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to parse diff: {0}")]
    DiffParse(String),

    #[error("GitHub token not found in environment")]
    MissingToken,
}

/// Parse a GitHub PR URL into its component parts.
///
/// Expected format: https://github.com/{owner}/{repo}/pull/{number}
pub fn parse_pr_url(url: &str) -> Result<PrUrl, PrError> {
    let parsed = reqwest::Url::parse(url).map_err(|_| PrError::InvalidUrl(url.to_string()))?;

    if parsed.host_str() != Some("github.com") {
        return Err(PrError::InvalidUrl(url.to_string()));
    }

    let segments: Vec<_> = parsed
        .path_segments()
        .ok_or_else(|| PrError::InvalidUrl(url.to_string()))?
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.len() != 4 || segments[2] != "pull" {
        return Err(PrError::InvalidUrl(url.to_string()));
    }

    let pr_number = segments[3]
        .parse::<u64>()
        .map_err(|_| PrError::InvalidUrl(url.to_string()))?;

    Ok(PrUrl {
        owner: segments[0].to_string(),
        repo: segments[1].to_string(),
        pr_number,
    })
}

/// Fetch PR metadata and the raw unified diff from the GitHub API.
///
/// Both GETs hit /repos/{owner}/{repo}/pulls/{number}; the second asks for
/// `application/vnd.github.diff` instead of JSON. They run concurrently and
/// either failure aborts the fetch.
#[instrument(skip(config), fields(owner = %pr_url.owner, repo = %pr_url.repo, pr = pr_url.pr_number))]
pub async fn fetch_pull_request(
    pr_url: &PrUrl,
    config: &crate::config::Config,
) -> Result<PullRequest, PrError> {
    let token = config.github_token().ok_or(PrError::MissingToken)?;
    let client = reqwest::Client::new();
    let base_url = format!(
        "https://api.github.com/repos/{}/{}/pulls/{}",
        pr_url.owner, pr_url.repo, pr_url.pr_number
    );

    #[derive(serde::Deserialize)]
    struct User {
        login: String,
    }

    #[derive(serde::Deserialize)]
    struct PullResponse {
        number: u64,
        title: String,
        body: Option<String>,
        user: User,
    }

    let metadata = async {
        debug!("fetching PR metadata from GitHub API");
        let response = client
            .get(&base_url)
            .header("User-Agent", "pr-video")
            .bearer_auth(&token)
            .send()
            .await?
            .error_for_status()?;
        response.json::<PullResponse>().await
    };

    let diff = async {
        debug!("fetching PR diff from GitHub API");
        client
            .get(&base_url)
            .header("User-Agent", "pr-video")
            .bearer_auth(&token)
            .header("Accept", "application/vnd.github.diff")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    };

    let (metadata, diff_text) = tokio::try_join!(metadata, diff)?;
    debug!(title = %metadata.title, diff_bytes = diff_text.len(), "received PR data");

    Ok(PullRequest {
        number: metadata.number,
        title: metadata.title,
        body: metadata.body.unwrap_or_default(),
        author: metadata.user.login,
        repo: format!("{}/{}", pr_url.owner, pr_url.repo),
        diff: diff_text,
    })
}
