pub mod types;

pub use types::{RenderPlan, VideoSettings};

use crate::analysis::PrAnalysis;
use crate::config::VideoConfig;
use crate::timeline::compose;
use colored::Colorize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Failed to write plan file: {0}")]
    FileWrite(#[from] std::io::Error),
    #[error("Failed to serialize plan: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Package the analysis and the composed timeline into the render plan
/// handed to the external rendering engine.
pub fn build(
    analysis: PrAnalysis,
    recording: Option<String>,
    suggested_demo_url: Option<String>,
    video: &VideoConfig,
) -> RenderPlan {
    let segments = compose(
        &analysis,
        recording.as_deref(),
        video.fps,
        video.duration_frames,
    );
    RenderPlan {
        video: VideoSettings::from(video),
        recording,
        suggested_demo_url,
        analysis,
        segments,
    }
}

/// Write the plan as pretty JSON to a file, or to stdout when no path is
/// given.
#[instrument(skip(plan), fields(pr = plan.analysis.number, frames = plan.video.duration_frames))]
pub fn output(plan: &RenderPlan, output_path: Option<&Path>) -> Result<(), PlanError> {
    let json = serde_json::to_string_pretty(plan)?;
    match output_path {
        None => {
            debug!("writing render plan to stdout");
            println!("{}", json);
        }
        Some(path) => {
            debug!(path = %path.display(), "writing render plan to file");
            std::fs::write(path, json)?;
        }
    }
    Ok(())
}

/// Write the bare analysis record as pretty JSON to a file or stdout.
pub fn output_analysis(
    analysis: &PrAnalysis,
    output_path: Option<&Path>,
) -> Result<(), PlanError> {
    let json = serde_json::to_string_pretty(analysis)?;
    match output_path {
        None => println!("{}", json),
        Some(path) => std::fs::write(path, json)?,
    }
    Ok(())
}

/// Print a colored terminal summary of the plan: PR header, narration, and
/// the frame schedule.
pub fn print_summary(plan: &RenderPlan) {
    let analysis = &plan.analysis;
    println!();
    println!("PR #{}: \"{}\"", analysis.number, analysis.title);
    println!(
        "Author: {} | Files changed: {} | {} {}",
        analysis.author,
        analysis.files.len(),
        format!("+{}", analysis.additions).green(),
        format!("-{}", analysis.deletions).red()
    );
    if analysis.is_frontend {
        println!("{}", "Frontend change detected".cyan());
    }
    println!();

    println!("═══ Narration ═══");
    println!("{}", analysis.narration);
    if !analysis.key_files.is_empty() {
        println!("Key files: {}", analysis.key_files.join(", "));
    }
    println!();

    println!(
        "═══ Timeline: {} frames @ {} fps ═══",
        plan.video.duration_frames, plan.video.fps
    );
    for segment in &plan.segments {
        println!(
            "  {} [{:>4} .. {:>4})",
            format!("{:<8}", segment.name).bold(),
            segment.start_frame,
            segment.end_frame()
        );
    }
    println!();
}
