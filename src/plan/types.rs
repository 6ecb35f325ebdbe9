use serde::Serialize;

use crate::analysis::PrAnalysis;
use crate::config::VideoConfig;
use crate::timeline::types::TimelineSegment;

/// Output dimensions and timing for the external rendering engine.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSettings {
    pub fps: u32,
    pub width: u32,
    pub height: u32,
    pub duration_frames: u32,
}

impl From<&VideoConfig> for VideoSettings {
    fn from(config: &VideoConfig) -> Self {
        VideoSettings {
            fps: config.fps,
            width: config.width,
            height: config.height,
            duration_frames: config.duration_frames,
        }
    }
}

/// Everything the rendering engine needs to produce the video: settings,
/// the analysis record, and the fully scheduled timeline. This is the only
/// artifact the pipeline writes; no video bytes are produced here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub video: VideoSettings,
    pub recording: Option<String>,
    pub suggested_demo_url: Option<String>,
    pub analysis: PrAnalysis,
    pub segments: Vec<TimelineSegment>,
}
