use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    routing::{get, post},
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::sync::{broadcast, Mutex};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::api::{
    list_modes, resolve_mode, resolve_mood, ApiArticleRequest, ApiArticleResponse, ApiCtasRequest,
    ApiHooksRequest, ApiHooksResponse, ApiShitpostRequest, ApiShitpostResponse, ApiThreadRequest,
    ApiThreadResponse, ApiVoiceRequest, ApiVoiceResponse,
};
use authority_engine::config::EngineConfig;
use authority_engine::{
    analyze_voice_with, generate_alternate_ctas_with, generate_article_with, generate_hooks_with,
    generate_shitposts_with, generate_thread_with,
};

// Pause between streamed stages so the client can narrate progress; the
// engine itself is synchronous.
const STAGE_PACING: Duration = Duration::from_millis(220);

#[derive(Clone)]
struct AppState {
    config: Arc<EngineConfig>,
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
}

#[derive(Clone, Serialize)]
struct StreamEvent {
    event: String,
    message: String,
    timestamp_ms: u128,
}

#[derive(serde::Deserialize)]
struct StreamQuery {
    request_id: String,
}

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, config_path) = EngineConfig::load(None)?;
    info!(path = ?config_path, "engine config loaded");

    let state = AppState {
        config: Arc::new(config),
        channels: Arc::new(Mutex::new(HashMap::new())),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/modes", get(modes_handler))
        .route("/api/thread", post(thread_handler))
        .route("/api/thread/stream", get(stream_handler))
        .route("/api/hooks", post(hooks_handler))
        .route("/api/article", post(article_handler))
        .route("/api/shitposts", post(shitposts_handler))
        .route("/api/voice", post(voice_handler))
        .route("/api/ctas", post(ctas_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;
    info!(%addr, "listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn modes_handler() -> impl IntoResponse {
    Json(list_modes())
}

async fn thread_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiThreadRequest>,
) -> Json<ApiThreadResponse> {
    let streamed = request.request_id.is_some();
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(generate_request_id);
    let (request, warnings) = request.into_request();

    let channel = if streamed {
        Some(get_or_create_channel(&state, &request_id).await)
    } else {
        None
    };

    if let Some(sender) = channel.as_ref() {
        send_event(sender, "arc", "Assembling narrative arc");
        tokio::time::sleep(STAGE_PACING).await;
        send_event(sender, "fill", "Filling templates");
        tokio::time::sleep(STAGE_PACING).await;
    }

    let mut rng = StdRng::from_entropy();
    let bundle = generate_thread_with(&request, &state.config, &mut rng);

    if let Some(sender) = channel.as_ref() {
        send_event(sender, "score", "Scoring engagement");
        tokio::time::sleep(STAGE_PACING).await;
        send_event(sender, "done", "Generation complete");
        schedule_cleanup(state.channels.clone(), request_id.clone());
    }

    info!(
        score = bundle.engagement_score,
        tweets = bundle.segments.len(),
        mode = request.mode.label(),
        "thread generated"
    );

    Json(ApiThreadResponse {
        request_id,
        bundle,
        warnings,
    })
}

async fn stream_handler(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>, StatusCode>
{
    let sender = get_or_create_channel(&state, &query.request_id).await;
    let receiver = sender.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|event| match event {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data)))
        }
        Err(_) => None,
    });

    send_event(&sender, "connected", "Streaming generation status");
    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(8))))
}

async fn hooks_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiHooksRequest>,
) -> Json<ApiHooksResponse> {
    let mut warnings = Vec::new();
    let mode = resolve_mode(request.mode.as_deref(), &mut warnings);
    let topic = request.topic.unwrap_or_default();

    let mut rng = StdRng::from_entropy();
    let hooks = generate_hooks_with(
        &topic,
        mode,
        request.digest.as_ref(),
        &state.config,
        &mut rng,
    );
    info!(count = hooks.len(), mode = mode.label(), "hooks generated");

    Json(ApiHooksResponse { hooks, warnings })
}

async fn article_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiArticleRequest>,
) -> Json<ApiArticleResponse> {
    let mut warnings = Vec::new();
    let mode = resolve_mode(request.mode.as_deref(), &mut warnings);
    let topic = request.topic.unwrap_or_default();
    let context = request.context.unwrap_or_default();

    let mut rng = StdRng::from_entropy();
    let article = generate_article_with(
        &topic,
        &context,
        mode,
        request.digest.as_ref(),
        &state.config,
        &mut rng,
    );
    info!(sections = article.sections.len(), mode = mode.label(), "article generated");

    Json(ApiArticleResponse { article, warnings })
}

async fn shitposts_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiShitpostRequest>,
) -> Json<ApiShitpostResponse> {
    let mut warnings = Vec::new();
    let mood = resolve_mood(request.mood.as_deref(), &mut warnings);
    let topic = request.topic.unwrap_or_default();
    let degen_level = request.degen_level.unwrap_or(3).max(1).min(5);

    let mut rng = StdRng::from_entropy();
    let posts = generate_shitposts_with(&topic, mood, degen_level, &state.config, &mut rng);
    info!(count = posts.len(), mood = mood.label(), "shitposts generated");

    Json(ApiShitpostResponse { posts, warnings })
}

async fn voice_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiVoiceRequest>,
) -> Json<ApiVoiceResponse> {
    let mut warnings = Vec::new();
    let sample = request.sample.unwrap_or_default();

    let mut rng = StdRng::from_entropy();
    let analysis = analyze_voice_with(&sample, &state.config, &mut rng);
    if analysis.is_none() {
        warnings.push("need at least 3 non-empty lines of sample text".to_string());
    }

    Json(ApiVoiceResponse { analysis, warnings })
}

async fn ctas_handler(Json(request): Json<ApiCtasRequest>) -> impl IntoResponse {
    let mut warnings = Vec::new();
    let mode = resolve_mode(request.mode.as_deref(), &mut warnings);
    let topic = request.topic.unwrap_or_default();

    let mut rng = StdRng::from_entropy();
    let ctas = generate_alternate_ctas_with(&topic, mode, &mut rng);
    Json(serde_json::json!({ "ctas": ctas, "warnings": warnings }))
}

async fn get_or_create_channel(
    state: &AppState,
    request_id: &str,
) -> broadcast::Sender<StreamEvent> {
    let mut guard = state.channels.lock().await;
    if let Some(sender) = guard.get(request_id) {
        return sender.clone();
    }
    let (sender, _) = broadcast::channel(32);
    guard.insert(request_id.to_string(), sender.clone());
    sender
}

fn send_event(sender: &broadcast::Sender<StreamEvent>, event: &str, message: &str) {
    let _ = sender.send(StreamEvent {
        event: event.to_string(),
        message: message.to_string(),
        timestamp_ms: now_ms(),
    });
}

fn schedule_cleanup(
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
    request_id: String,
) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(10)).await;
        let mut guard = channels.lock().await;
        guard.remove(&request_id);
    });
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
