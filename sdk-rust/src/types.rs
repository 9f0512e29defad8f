use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response fields the client has no typed slot for. They are kept so a
/// response serializes back to exactly what the backend sent.
pub type ResponseExtra = Map<String, Value>;

/// A Confluence space as listed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct SpaceRef {
    pub name: String,
    pub key: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct SpacesResponse {
    pub spaces: Vec<SpaceRef>,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct PagesResponse {
    pub pages: Vec<String>,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

/// Question answered over a set of pages in one space.
/// Page titles are forwarded in the given order; duplicates are not removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct SearchRequest {
    pub space_key: String,
    pub page_titles: Vec<String>,
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct SearchResponse {
    pub response: String,
    pub pages_analyzed: u32,
    pub page_titles: Vec<String>,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct VideoRequest {
    /// Summarize this video instead of the first one embedded in the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub space_key: String,
    pub page_title: String,
    /// Follow-up question answered from the transcript.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct QaPair {
    pub question: String,
    pub answer: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

/// Reply of `/video-summarizer`. Asking a question yields only an answer;
/// otherwise the backend sends the full summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum VideoResponse {
    Summary(VideoSummary),
    Answer(VideoAnswer),
}

impl VideoResponse {
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Summary(summary) => summary.answer.as_deref(),
            Self::Answer(answer) => Some(&answer.answer),
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&VideoSummary> {
        match self {
            Self::Summary(summary) => Some(summary),
            Self::Answer(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct VideoSummary {
    pub summary: String,
    pub quotes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Vec<String>>,
    pub qa: Vec<QaPair>,
    pub page_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// e.g. `transcript` and `video_url` from the hosted backend.
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct VideoAnswer {
    pub answer: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct CodeRequest {
    pub space_key: String,
    pub page_title: String,
    pub instruction: String,
    /// Convert the page's code to this language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct CodeResponse {
    pub summary: String,
    pub original_code: String,
    pub detected_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

/// Compares two versions of a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ImpactRequest {
    pub space_key: String,
    pub old_page_title: String,
    pub new_page_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ImpactResponse {
    pub lines_added: u64,
    pub lines_removed: u64,
    pub files_changed: u64,
    pub percentage_change: f64,
    pub impact_analysis: String,
    pub recommendations: String,
    pub risk_analysis: String,
    pub risk_level: String,
    pub risk_score: f64,
    pub risk_factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub diff: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct TestRequest {
    pub space_key: String,
    pub code_page_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_input_page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct TestResponse {
    pub test_strategy: String,
    pub cross_platform_testing: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_response: Option<String>,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ImagesResponse {
    pub images: Vec<String>,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ImageRequest {
    pub space_key: String,
    pub page_title: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ImageSummaryResponse {
    pub summary: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

/// A question about an image, grounded on a summary obtained earlier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ImageQaRequest {
    pub space_key: String,
    pub page_title: String,
    pub image_url: String,
    pub summary: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ImageQaResponse {
    pub answer: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ChartRequest {
    pub space_key: String,
    pub page_title: String,
    pub image_url: String,
    /// e.g. `bar`, `line`, `pie`, `stacked_bar`. Not validated here.
    pub chart_type: String,
    pub filename: String,
    /// Image format such as `png`. Not validated here.
    pub format: String,
}

/// `chart_data` is base64 image data as sent by the backend; it is not
/// decoded by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ChartResponse {
    pub chart_data: String,
    pub mime_type: String,
    pub filename: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

/// How saved content is merged into the existing page body.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SaveMode {
    #[default]
    Append,
    Overwrite,
    /// Replace the section under `heading_text`.
    ReplaceSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct SaveToConfluenceRequest {
    pub space_key: String,
    pub page_title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SaveMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_text: Option<String>,
}

impl SaveToConfluenceRequest {
    pub fn new(
        space_key: impl Into<String>,
        page_title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            space_key: space_key.into(),
            page_title: page_title.into(),
            content: content.into(),
            mode: None,
            heading_text: None,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: SaveMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn replace_section(mut self, heading_text: impl Into<String>) -> Self {
        self.mode = Some(SaveMode::ReplaceSection);
        self.heading_text = Some(heading_text.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct SaveToConfluenceResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Storage-format body of the page before the save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_version: Option<String>,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct SavePreview {
    pub preview_content: String,
    /// Unified diff between the current and the would-be page body.
    pub diff: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct UndoRequest {
    pub space_key: String,
    pub page_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct UndoResponse {
    pub message: String,
    pub restored_version: u64,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct HealthStatus {
    pub message: String,
    pub status: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: ResponseExtra,
}
