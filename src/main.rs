mod analysis;
mod config;
mod demo;
mod plan;
mod pr;
mod render;
mod timeline;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, info_span, warn};
use tracing_subscriber::EnvFilter;

use analysis::narration::{AnthropicClient, NarrationBackend};

/// pr-video — turns a GitHub Pull Request into the complete plan for a
/// short narrated video: fetches the PR, analyzes the diff, and composes a
/// frame-accurate timeline for the external rendering engine.
#[derive(Parser, Debug)]
#[command(name = "pr-video", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a PR and print the analysis record as JSON
    Analyze {
        #[command(flatten)]
        source: PrSource,

        /// Optional output file path for the analysis JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the full pipeline and emit the render plan
    Generate {
        #[command(flatten)]
        source: PrSource,

        /// Optional output file path for the render plan JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pre-captured screen recording to play instead of the diff view
        #[arg(long)]
        recording: Option<String>,

        /// Frames per second of the output video
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        fps: Option<u32>,

        /// Total length of the output video in frames
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        frames: Option<u32>,

        /// Base URL of a running dev server; suggests a demo page from the
        /// routes the PR adds
        #[arg(long)]
        demo_base_url: Option<String>,
    },

    /// Print the visual description of a single frame
    Frame {
        #[command(flatten)]
        source: PrSource,

        /// Frame number to describe
        #[arg(long)]
        at: u32,

        /// Pre-captured screen recording to play instead of the diff view
        #[arg(long)]
        recording: Option<String>,

        /// Frames per second of the output video
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        fps: Option<u32>,

        /// Total length of the output video in frames
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        frames: Option<u32>,
    },
}

#[derive(Args, Debug)]
struct PrSource {
    /// GitHub Pull Request URL (e.g., https://github.com/org/repo/pull/42)
    ///
    /// Not required when --mock is used.
    pr_url: Option<String>,

    /// Use a built-in mock PR for demo purposes (no tokens needed)
    #[arg(long)]
    r#mock: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading configuration");
    let config = config::Config::load()?;

    match cli.command {
        Command::Analyze { source, output } => {
            let analysis_record = run_analysis(&source, &config).await?;
            plan::output_analysis(&analysis_record, output.as_deref())?;
        }

        Command::Generate {
            source,
            output,
            recording,
            fps,
            frames,
            demo_base_url,
        } => {
            let analysis_record = run_analysis(&source, &config).await?;

            let suggested_demo_url = demo_base_url.map(|base| {
                let routes = demo::extract_new_routes(&analysis_record.files);
                debug!(routes = routes.len(), "extracted routes from added files");
                demo::build_demo_url(&base, &routes)
            });

            let video = video_settings(&config, fps, frames);
            info!("composing timeline");
            let built_plan = plan::build(analysis_record, recording, suggested_demo_url, &video);

            plan::output(&built_plan, output.as_deref())?;
            if let Some(path) = output.as_deref() {
                plan::print_summary(&built_plan);
                println!("Plan written to {}", path.display());
            }
            info!(segments = built_plan.segments.len(), "done");
        }

        Command::Frame {
            source,
            at,
            recording,
            fps,
            frames,
        } => {
            let analysis_record = run_analysis(&source, &config).await?;
            let video = video_settings(&config, fps, frames);
            if at >= video.duration_frames {
                warn!(at, frames = video.duration_frames, "frame is past the end of the video");
            }

            let segments = timeline::compose(
                &analysis_record,
                recording.as_deref(),
                video.fps,
                video.duration_frames,
            );
            let frame_desc = render::render_frame(&segments, at, video.fps);
            println!("{}", serde_json::to_string_pretty(&frame_desc)?);
        }
    }

    Ok(())
}

/// Fetch (or mock) the pull request and run the analysis over it.
async fn run_analysis(
    source: &PrSource,
    config: &config::Config,
) -> Result<analysis::PrAnalysis, Box<dyn std::error::Error>> {
    let pull_request = if source.r#mock {
        info!("using mock PR data for demo");
        build_mock_pr()
    } else {
        let pr_url = source.pr_url.as_deref().ok_or(
            "PR URL is required unless --mock is used. Usage: pr-video <COMMAND> <URL> or pr-video <COMMAND> --mock",
        )?;

        let _span = info_span!("pr_video", pr_url = %pr_url).entered();

        info!("parsing PR URL");
        let parsed_url = pr::parse_pr_url(pr_url)?;
        debug!(owner = %parsed_url.owner, repo = %parsed_url.repo, pr = parsed_url.pr_number, "parsed PR URL");

        info!("fetching pull request from GitHub");
        let fetched = pr::fetch_pull_request(&parsed_url, config).await?;
        info!(diff_bytes = fetched.diff.len(), "fetched PR");
        fetched
    };

    let backend = narration_backend(source, config);
    info!("analyzing diff");
    let analysis_record = analysis::analyze_pull_request(
        &pull_request,
        backend.as_ref().map(|b| b as &dyn NarrationBackend),
    )
    .await?;
    info!(
        files = analysis_record.files.len(),
        frontend = analysis_record.is_frontend,
        "analysis complete"
    );

    Ok(analysis_record)
}

/// The narration service is optional: mock runs and missing credentials
/// fall back to the deterministic template.
fn narration_backend(source: &PrSource, config: &config::Config) -> Option<AnthropicClient> {
    if source.r#mock {
        debug!("mock mode uses the narration fallback");
        return None;
    }
    match AnthropicClient::from_config(config) {
        Ok(client) => Some(client),
        Err(err) => {
            warn!(%err, "narration service unavailable, falling back to template");
            None
        }
    }
}

/// Video settings from config, overridden by command-line flags.
fn video_settings(config: &config::Config, fps: Option<u32>, frames: Option<u32>) -> config::VideoConfig {
    let mut video = config.video.clone();
    if let Some(fps) = fps {
        video.fps = fps;
    }
    if let Some(frames) = frames {
        video.duration_frames = frames;
    }
    video
}

/// Build a mock PullRequest from the embedded sample diff fixture.
/// This enables running the full pipeline without any tokens.
fn build_mock_pr() -> pr::PullRequest {
    pr::PullRequest {
        number: 42,
        title: "Add user authentication flow".to_string(),
        body: "Adds a login form with client-side validation and session handling.".to_string(),
        author: "johndoe".to_string(),
        repo: "acme/web-app".to_string(),
        diff: include_str!("../tests/fixtures/sample_diff.patch").to_string(),
    }
}
