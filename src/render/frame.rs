use serde::Serialize;

/// Computed presentation state for one element: opacity plus the offsets and
/// scale its entrance animation produced. The external rendering engine
/// applies these on top of its own layout.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            opacity: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

/// Renderer-agnostic visual primitives. One output frame is an ordered list
/// of these; later elements paint over earlier ones.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Element {
    /// Rounded filled panel behind a group of elements.
    Panel {
        id: &'static str,
        background: &'static str,
        border: &'static str,
        style: Style,
    },
    #[serde(rename_all = "camelCase")]
    Text {
        id: &'static str,
        content: String,
        color: &'static str,
        font_size: u32,
        style: Style,
    },
    #[serde(rename_all = "camelCase")]
    FileRow {
        path: String,
        additions: usize,
        deletions: usize,
        marker: char,
        marker_color: &'static str,
        /// Alternating row shading, true for every second row.
        zebra: bool,
        style: Style,
    },
    #[serde(rename_all = "camelCase")]
    DiffRow {
        #[serde(skip_serializing_if = "Option::is_none")]
        line_number: Option<usize>,
        indicator: char,
        indicator_color: &'static str,
        content: String,
        background: &'static str,
        style: Style,
    },
    #[serde(rename_all = "camelCase")]
    StatCard {
        label: &'static str,
        display_value: String,
        color: &'static str,
        style: Style,
    },
    Video {
        src: String,
        style: Style,
    },
    CaptionBox {
        text: String,
        background: &'static str,
        style: Style,
    },
}

/// The complete visual description of one output frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDesc {
    pub frame: u32,
    pub background: &'static str,
    pub elements: Vec<Element>,
}
