use crate::{
    api_key::{ApiKeyProvider, NoApiKey},
    client_utils::{self, API_FALLBACK_MESSAGE, EXPORT_FALLBACK_MESSAGE},
    telemetry, AssistantApi, AssistantResult, ChartRequest, ChartResponse, CodeRequest,
    CodeResponse, ExportEnvelope, ExportPayload, ExportRequest, ExportedFile, HealthStatus,
    ImageQaRequest, ImageQaResponse, ImageRequest, ImageSummaryResponse, ImagesResponse,
    ImpactRequest, ImpactResponse, PagesResponse, SavePreview, SaveToConfluenceRequest,
    SaveToConfluenceResponse, SearchRequest, SearchResponse, SpacesResponse, TestRequest,
    TestResponse, UndoRequest, UndoResponse, VideoRequest, VideoResponse,
};
use reqwest::{header::HeaderMap, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::{collections::HashMap, fmt, sync::Arc};

pub const DEFAULT_BASE_URL: &str = "https://finalproject-75ss.onrender.com";

/// Client for the assistant backend.
///
/// Cloning is cheap: clones share the connection pool and key provider.
#[derive(Clone)]
pub struct AssistantClient {
    base_url: String,
    client: Client,
    api_key: Arc<dyn ApiKeyProvider>,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct AssistantClientOptions {
    /// Defaults to [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
    /// Consulted on every request; defaults to sending no key.
    pub api_key: Option<Arc<dyn ApiKeyProvider>>,
    /// Sent with every request. These win over the built-in
    /// `Content-Type` and `x-api-key` headers.
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl AssistantClient {
    #[must_use]
    pub fn new(options: AssistantClientOptions) -> Self {
        let AssistantClientOptions {
            base_url,
            api_key,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let api_key = api_key.unwrap_or_else(|| Arc::new(NoApiKey));
        let headers = headers.unwrap_or_default();

        Self {
            base_url,
            client,
            api_key,
            headers,
        }
    }

    /// A client that also sends `headers`, for one call or a group of calls.
    /// They layer over the headers given at construction, and the original
    /// client is left untouched.
    #[must_use]
    pub fn with_headers<I, K, V>(&self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut client = self.clone();
        client.headers.extend(
            headers
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        client
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_headers(&self) -> AssistantResult<HeaderMap> {
        let api_key = self.api_key.api_key();
        client_utils::merge_headers(api_key.as_deref(), &self.headers)
    }

    async fn request<T, R>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> AssistantResult<R>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        telemetry::trace_request(operation, &method, path, async {
            let url = format!("{}{path}", self.base_url);
            let headers = self.request_headers()?;
            client_utils::send_json(
                &self.client,
                method.clone(),
                &url,
                body,
                headers,
                API_FALLBACK_MESSAGE,
            )
            .await
        })
        .await
    }

    async fn get<R: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> AssistantResult<R> {
        self.request::<(), R>(operation, Method::GET, path, None)
            .await
    }

    async fn post<T, R>(&self, operation: &'static str, path: &str, body: &T) -> AssistantResult<R>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        self.request(operation, Method::POST, path, Some(body)).await
    }
}

impl fmt::Debug for AssistantClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantClient")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl AssistantApi for AssistantClient {
    async fn get_spaces(&self) -> AssistantResult<SpacesResponse> {
        self.get("get_spaces", "/spaces").await
    }

    async fn get_pages(&self, space_key: &str) -> AssistantResult<PagesResponse> {
        self.get("get_pages", &format!("/pages/{space_key}")).await
    }

    async fn search(&self, request: SearchRequest) -> AssistantResult<SearchResponse> {
        self.post("search", "/search", &request).await
    }

    async fn video_summarizer(&self, request: VideoRequest) -> AssistantResult<VideoResponse> {
        self.post("video_summarizer", "/video-summarizer", &request)
            .await
    }

    async fn code_assistant(&self, request: CodeRequest) -> AssistantResult<CodeResponse> {
        self.post("code_assistant", "/code-assistant", &request)
            .await
    }

    async fn impact_analyzer(&self, request: ImpactRequest) -> AssistantResult<ImpactResponse> {
        self.post("impact_analyzer", "/impact-analyzer", &request)
            .await
    }

    async fn test_support(&self, request: TestRequest) -> AssistantResult<TestResponse> {
        self.post("test_support", "/test-support", &request).await
    }

    async fn get_images(
        &self,
        space_key: &str,
        page_title: &str,
    ) -> AssistantResult<ImagesResponse> {
        let path = format!("/images/{space_key}/{}", urlencoding::encode(page_title));
        self.get("get_images", &path).await
    }

    async fn image_summary(&self, request: ImageRequest) -> AssistantResult<ImageSummaryResponse> {
        self.post("image_summary", "/image-summary", &request).await
    }

    async fn image_qa(&self, request: ImageQaRequest) -> AssistantResult<ImageQaResponse> {
        self.post("image_qa", "/image-qa", &request).await
    }

    async fn create_chart(&self, request: ChartRequest) -> AssistantResult<ChartResponse> {
        self.post("create_chart", "/create-chart", &request).await
    }

    async fn export_content(&self, request: ExportRequest) -> AssistantResult<ExportedFile> {
        let method = Method::POST;
        telemetry::trace_request("export_content", &method, "/export", async {
            let url = format!("{}/export", self.base_url);
            let headers = self.request_headers()?;
            let envelope: ExportEnvelope = client_utils::send_json(
                &self.client,
                method.clone(),
                &url,
                Some(&request),
                headers,
                EXPORT_FALLBACK_MESSAGE,
            )
            .await?;

            let suggested_filename = envelope.filename.clone();
            let payload = ExportPayload::decode(&request.format, envelope)?;
            tracing::debug!(
                format = %request.format,
                mime = payload.mime(),
                bytes = payload.bytes().len(),
                "export decoded"
            );

            Ok(ExportedFile {
                payload,
                filename: request.filename.clone(),
                suggested_filename,
            })
        })
        .await
    }

    async fn save_to_confluence(
        &self,
        request: SaveToConfluenceRequest,
    ) -> AssistantResult<SaveToConfluenceResponse> {
        self.post("save_to_confluence", "/save-to-confluence", &request)
            .await
    }

    async fn preview_save_to_confluence(
        &self,
        request: SaveToConfluenceRequest,
    ) -> AssistantResult<SavePreview> {
        self.post(
            "preview_save_to_confluence",
            "/preview-save-to-confluence",
            &request,
        )
        .await
    }

    async fn undo_last_change(&self, request: UndoRequest) -> AssistantResult<UndoResponse> {
        self.post("undo_last_change", "/undo-last-change", &request)
            .await
    }

    async fn health(&self) -> AssistantResult<HealthStatus> {
        self.get("health", "/").await
    }

    async fn self_test(&self) -> AssistantResult<HealthStatus> {
        self.get("self_test", "/test").await
    }
}
