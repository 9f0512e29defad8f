use crate::{
    AssistantResult, ChartRequest, ChartResponse, CodeRequest, CodeResponse, ExportRequest,
    ExportedFile, HealthStatus, ImageQaRequest, ImageQaResponse, ImageRequest,
    ImageSummaryResponse, ImagesResponse, ImpactRequest, ImpactResponse, PagesResponse,
    SavePreview, SaveToConfluenceRequest, SaveToConfluenceResponse, SearchRequest,
    SearchResponse, SpacesResponse, TestRequest, TestResponse, UndoRequest, UndoResponse,
    VideoRequest, VideoResponse,
};

/// Every operation the assistant backend offers.
///
/// Panels program against this trait so tests can swap in a fake backend.
/// Each call is a single request/response round trip with no retries.
#[async_trait::async_trait]
pub trait AssistantApi: Send + Sync {
    /// `GET /spaces`
    async fn get_spaces(&self) -> AssistantResult<SpacesResponse>;

    /// `GET /pages/{space_key}`
    async fn get_pages(&self, space_key: &str) -> AssistantResult<PagesResponse>;

    async fn search(&self, request: SearchRequest) -> AssistantResult<SearchResponse>;

    async fn video_summarizer(&self, request: VideoRequest) -> AssistantResult<VideoResponse>;

    async fn code_assistant(&self, request: CodeRequest) -> AssistantResult<CodeResponse>;

    async fn impact_analyzer(&self, request: ImpactRequest) -> AssistantResult<ImpactResponse>;

    async fn test_support(&self, request: TestRequest) -> AssistantResult<TestResponse>;

    /// `GET /images/{space_key}/{page_title}` with the title percent-escaped.
    async fn get_images(&self, space_key: &str, page_title: &str)
        -> AssistantResult<ImagesResponse>;

    async fn image_summary(&self, request: ImageRequest) -> AssistantResult<ImageSummaryResponse>;

    async fn image_qa(&self, request: ImageQaRequest) -> AssistantResult<ImageQaResponse>;

    async fn create_chart(&self, request: ChartRequest) -> AssistantResult<ChartResponse>;

    /// Convert content into a file. PDF and DOCX payloads are base64
    /// decoded; other formats are taken as UTF-8 text.
    async fn export_content(&self, request: ExportRequest) -> AssistantResult<ExportedFile>;

    async fn save_to_confluence(
        &self,
        request: SaveToConfluenceRequest,
    ) -> AssistantResult<SaveToConfluenceResponse>;

    /// Same input as [`AssistantApi::save_to_confluence`], but nothing is
    /// written; returns the diff the save would produce.
    async fn preview_save_to_confluence(
        &self,
        request: SaveToConfluenceRequest,
    ) -> AssistantResult<SavePreview>;

    /// Restore the version preceding the current one.
    async fn undo_last_change(&self, request: UndoRequest) -> AssistantResult<UndoResponse>;

    /// `GET /`
    async fn health(&self) -> AssistantResult<HealthStatus>;

    /// `GET /test`
    async fn self_test(&self) -> AssistantResult<HealthStatus>;
}
