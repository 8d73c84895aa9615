//! The presentation shell: a single-session axum app over the configurator.

use std::num::NonZeroU16;
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, State};
use axum::http::HeaderValue;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::catalog::{self, Category};
use crate::constants::DOWNLOAD_FILE_PREFIX;
use crate::error::StudioError;
use crate::gemini::{GeminiClient, GeneratedImage, ImageGenerator};
use crate::prompt::format_prompt;
use crate::session::ThumbnailConfig;

mod views;

use views::StudioTemplate;

/// Where the shell sits in the generate lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Generating,
    Error,
}

/// Session-scoped state: the configuration being edited, the lifecycle
/// phase, and the most recent image (kept until replaced).
#[derive(Debug)]
struct Session {
    config: ThumbnailConfig,
    phase: Phase,
    image: Option<GeneratedImage>,
}

impl Session {
    fn new() -> Self {
        Self {
            config: ThumbnailConfig::default(),
            phase: Phase::Idle,
            image: None,
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    session: Arc<RwLock<Session>>,
    generator: Arc<dyn ImageGenerator>,
}

impl AppState {
    fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            generator,
        }
    }
}

#[derive(Deserialize)]
struct SelectForm {
    category: String,
    option_id: String,
}

#[derive(Deserialize)]
struct IntensityForm {
    value: i64,
}

/// handles the / GET
async fn studio_handler(State(state): State<AppState>) -> Result<StudioTemplate, StudioError> {
    let session = state.session.read().await;
    Ok(views::studio_page(&session))
}

/// Applies one option selection. Unknown categories or ids that are not in
/// the category's catalog are rejected, so the configuration only ever holds
/// catalog ids.
async fn select_handler(
    State(state): State<AppState>,
    Form(form): Form<SelectForm>,
) -> Result<Redirect, StudioError> {
    let category = Category::from_str(&form.category).map_err(|_| StudioError::BadRequest)?;
    if !catalog::contains(category, &form.option_id) {
        info!(
            "Rejecting unknown option {} for category {}",
            form.option_id,
            category.as_str()
        );
        return Err(StudioError::BadRequest);
    }

    let mut session = state.session.write().await;
    session.config.select(category, &form.option_id);
    Ok(Redirect::to("/"))
}

async fn intensity_handler(
    State(state): State<AppState>,
    Form(form): Form<IntensityForm>,
) -> Result<Redirect, StudioError> {
    let mut session = state.session.write().await;
    session.config.set_intensity(form.value);
    Ok(Redirect::to("/"))
}

/// Runs one generation. The lock is never held across the network await; the
/// `Generating` phase is the in-flight guard, so a trigger that arrives while
/// a request is outstanding redirects without doing anything.
///
/// The call and the outcome write run in a detached task that owns the state.
/// A request sent always runs to completion and records its outcome, even
/// when the browser disconnects and axum drops this handler's future.
async fn generate_handler(State(state): State<AppState>) -> Result<Redirect, StudioError> {
    let prompt = {
        let mut session = state.session.write().await;
        if session.phase == Phase::Generating {
            info!("Generation already in flight, ignoring trigger");
            return Ok(Redirect::to("/"));
        }
        session.phase = Phase::Generating;
        format_prompt(&session.config.snapshot())
    };

    let task = tokio::spawn({
        let state = state.clone();
        async move {
            let result = state.generator.generate(&prompt).await;

            let mut session = state.session.write().await;
            match result {
                Ok(image) => {
                    info!("Generated thumbnail ({} bytes)", image.bytes.len());
                    session.image = Some(image);
                    session.phase = Phase::Idle;
                }
                Err(err) => {
                    warn!("Thumbnail generation failed: {}", err);
                    session.phase = Phase::Error;
                }
            }
        }
    });

    if let Err(err) = task.await {
        error!("Generation task failed to complete: {}", err);
        let mut session = state.session.write().await;
        if session.phase == Phase::Generating {
            session.phase = Phase::Error;
        }
    }
    Ok(Redirect::to("/"))
}

async fn dismiss_handler(State(state): State<AppState>) -> Result<Redirect, StudioError> {
    let mut session = state.session.write().await;
    if session.phase == Phase::Error {
        session.phase = Phase::Idle;
    }
    Ok(Redirect::to("/"))
}

/// Serves the current image for the preview pane.
async fn thumbnail_handler(State(state): State<AppState>) -> Result<Response, StudioError> {
    let session = state.session.read().await;
    let Some(image) = session.image.as_ref() else {
        return Err(StudioError::NotFound("no generated thumbnail".to_string()));
    };

    let mut builder = Response::builder();
    if let Ok(value) = HeaderValue::from_str(&image.mime_type) {
        builder = builder.header(CONTENT_TYPE, value);
    }
    builder
        .body(axum::body::Body::from(image.bytes.clone()))
        .map_err(StudioError::from)
}

/// Offers the current image as a timestamped file download. A no-op redirect
/// when nothing has been generated yet.
async fn download_handler(State(state): State<AppState>) -> Result<Response, StudioError> {
    let session = state.session.read().await;
    let Some(image) = session.image.as_ref() else {
        return Ok(Redirect::to("/").into_response());
    };

    let filename = format!(
        "{}-{}.png",
        DOWNLOAD_FILE_PREFIX,
        Utc::now().timestamp_millis()
    );
    Response::builder()
        .header(CONTENT_TYPE, "image/png")
        .header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(axum::body::Body::from(image.bytes.clone()))
        .map_err(StudioError::from)
}

async fn styles_handler() -> impl IntoResponse {
    const STYLES: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/styles.css"));
    ([(CONTENT_TYPE, "text/css")], STYLES)
}

fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(studio_handler))
        .route("/static/styles.css", axum::routing::get(styles_handler))
        .route("/select", axum::routing::post(select_handler))
        .route("/intensity", axum::routing::post(intensity_handler))
        .route("/generate", axum::routing::post(generate_handler))
        .route("/dismiss", axum::routing::post(dismiss_handler))
        .route("/thumbnail.png", axum::routing::get(thumbnail_handler))
        .route("/download", axum::routing::get(download_handler))
}

/// Binds the listener and serves the studio until shutdown.
pub async fn setup_server(
    listen_addr: &str,
    port: NonZeroU16,
    generator: GeminiClient,
) -> Result<(), anyhow::Error> {
    let app = create_router().with_state(AppState::new(Arc::new(generator)));

    let addr = format!("{}:{}", listen_addr, port);
    info!("Starting server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {}", err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
    use http_body_util::BodyExt;
    use tokio::sync::Semaphore;
    use tower::ServiceExt;

    use crate::constants::GENERATION_FAILED_MESSAGE;
    use crate::gemini::GenerationError;

    fn test_image() -> GeneratedImage {
        GeneratedImage {
            bytes: b"fake-png-bytes".to_vec(),
            mime_type: "image/png".to_string(),
        }
    }

    /// Succeeds immediately, counting invocations.
    struct OkGenerator {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ImageGenerator for OkGenerator {
        async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(test_image())
        }
    }

    /// Fails the way an empty-candidate response does.
    struct EmptyGenerator;

    #[async_trait]
    impl ImageGenerator for EmptyGenerator {
        async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, GenerationError> {
            Err(GenerationError::NoCandidates)
        }
    }

    /// Counts invocations and parks until a permit is released, so tests can
    /// observe the shell mid-generation.
    struct GatedGenerator {
        calls: Arc<AtomicUsize>,
        gate: Arc<Semaphore>,
    }

    #[async_trait]
    impl ImageGenerator for GatedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let _permit = self.gate.acquire().await.expect("gate closed");
            Ok(test_image())
        }
    }

    fn app_with(generator: Arc<dyn ImageGenerator>) -> (Router, AppState) {
        let state = AppState::new(generator);
        (create_router().with_state(state.clone()), state)
    }

    async fn read_body(response: axum::response::Response) -> String {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        String::from_utf8_lossy(&bytes).to_string()
    }

    fn form_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("build request")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("build request")
    }

    #[tokio::test]
    async fn studio_page_lists_catalog_options() {
        let (app, _state) = app_with(Arc::new(EmptyGenerator));

        let response = app.oneshot(get("/")).await.expect("oneshot");
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_body(response).await;
        assert!(body.contains("Facial Emotion"));
        assert!(body.contains("Peaceful"));
        assert!(body.contains("Radiant Halo (Divine)"));
        assert!(body.contains("Generate Thumbnail"));
    }

    #[tokio::test]
    async fn select_updates_exactly_one_field() {
        let (app, state) = app_with(Arc::new(EmptyGenerator));

        let response = app
            .oneshot(form_post("/select", "category=emotion&option_id=joyful"))
            .await
            .expect("oneshot");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let session = state.session.read().await;
        assert_eq!(session.config.emotion, "joyful");
        let defaults = ThumbnailConfig::default();
        assert_eq!(session.config.pose, defaults.pose);
        assert_eq!(session.config.light_intensity, defaults.light_intensity);
    }

    #[tokio::test]
    async fn select_rejects_ids_outside_the_catalog() {
        let (app, state) = app_with(Arc::new(EmptyGenerator));

        let response = app
            .clone()
            .oneshot(form_post("/select", "category=emotion&option_id=furious"))
            .await
            .expect("oneshot");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(form_post("/select", "category=mood&option_id=peaceful"))
            .await
            .expect("oneshot");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let session = state.session.read().await;
        assert_eq!(session.config, ThumbnailConfig::default());
    }

    #[tokio::test]
    async fn intensity_is_clamped() {
        let (app, state) = app_with(Arc::new(EmptyGenerator));

        let response = app
            .oneshot(form_post("/intensity", "value=250"))
            .await
            .expect("oneshot");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let session = state.session.read().await;
        assert_eq!(session.config.light_intensity, 100);
    }

    #[tokio::test]
    async fn generate_stores_image_and_returns_to_idle() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (app, state) = app_with(Arc::new(OkGenerator {
            calls: calls.clone(),
        }));

        let response = app
            .clone()
            .oneshot(form_post("/generate", ""))
            .await
            .expect("oneshot");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        {
            let session = state.session.read().await;
            assert_eq!(session.phase, Phase::Idle);
            assert!(session.image.is_some());
        }

        let response = app.oneshot(get("/thumbnail.png")).await.expect("oneshot");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).expect("content type"),
            "image/png"
        );
    }

    #[tokio::test]
    async fn failed_generation_shows_fixed_message_and_dismiss_clears_it() {
        let (app, state) = app_with(Arc::new(EmptyGenerator));

        let response = app
            .clone()
            .oneshot(form_post("/generate", ""))
            .await
            .expect("oneshot");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        {
            let session = state.session.read().await;
            assert_eq!(session.phase, Phase::Error);
            assert!(session.image.is_none());
        }

        let response = app.clone().oneshot(get("/")).await.expect("oneshot");
        let body = read_body(response).await;
        assert!(body.contains(GENERATION_FAILED_MESSAGE));

        let response = app
            .oneshot(form_post("/dismiss", ""))
            .await
            .expect("oneshot");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let session = state.session.read().await;
        assert_eq!(session.phase, Phase::Idle);
        assert!(session.image.is_none());
    }

    #[tokio::test]
    async fn trigger_while_generating_is_a_noop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = Arc::new(Semaphore::new(0));
        let (app, state) = app_with(Arc::new(GatedGenerator {
            calls: calls.clone(),
            gate: gate.clone(),
        }));

        let first = tokio::spawn({
            let app = app.clone();
            async move { app.oneshot(form_post("/generate", "")).await }
        });

        // wait for the first request to reach the generator
        while calls.load(Ordering::SeqCst) == 0 {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        {
            let session = state.session.read().await;
            assert_eq!(session.phase, Phase::Generating);
        }

        let response = app
            .clone()
            .oneshot(form_post("/generate", ""))
            .await
            .expect("oneshot");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        gate.add_permits(1);
        let response = first.await.expect("join").expect("first generate");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let session = state.session.read().await;
        assert_eq!(session.phase, Phase::Idle);
        assert!(session.image.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn disconnected_client_does_not_wedge_the_session() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = Arc::new(Semaphore::new(0));
        let (app, state) = app_with(Arc::new(GatedGenerator {
            calls: calls.clone(),
            gate: gate.clone(),
        }));

        let first = tokio::spawn({
            let app = app.clone();
            async move { app.oneshot(form_post("/generate", "")).await }
        });

        while calls.load(Ordering::SeqCst) == 0 {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        // the browser goes away mid-generation
        first.abort();
        let _ = first.await;

        {
            let session = state.session.read().await;
            assert_eq!(session.phase, Phase::Generating);
        }

        // the request still runs to completion and records its outcome
        gate.add_permits(1);
        for _ in 0..200 {
            if state.session.read().await.phase == Phase::Idle {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        {
            let session = state.session.read().await;
            assert_eq!(session.phase, Phase::Idle);
            assert!(session.image.is_some());
        }

        // and the studio accepts a fresh trigger afterwards
        gate.add_permits(1);
        let response = app
            .oneshot(form_post("/generate", ""))
            .await
            .expect("oneshot");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn download_without_image_redirects_home() {
        let (app, _state) = app_with(Arc::new(EmptyGenerator));

        let response = app.oneshot(get("/download")).await.expect("oneshot");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn download_offers_timestamped_png() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (app, _state) = app_with(Arc::new(OkGenerator { calls }));

        let response = app
            .clone()
            .oneshot(form_post("/generate", ""))
            .await
            .expect("oneshot");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app.oneshot(get("/download")).await.expect("oneshot");
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .expect("content disposition")
            .to_str()
            .expect("header str");
        assert!(disposition.starts_with("attachment; filename=\"prayer-thumbnail-"));
        assert!(disposition.ends_with(".png\""));
    }
}
