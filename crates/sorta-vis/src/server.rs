//! Axum web server with WebSocket streaming for playback.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use sorta_algorithms::{validate_log, Algorithm, Complexity, Step, Value};
use sorta_playback::{
    benchmark, reconstruct, BenchmarkRow, Cursor, Frame, LaneFrame, PlaybackSpeed, Player,
    Session, SessionStatus,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Shared application state.
pub struct AppState {
    player: Player,
    max_input_len: usize,
}

/// Playback server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl VisServer {
    /// Create a server driving `session`. Must be called within a tokio runtime.
    pub fn new(session: Session) -> Self {
        let max_input_len = session.config().max_input_len;
        Self {
            state: Arc::new(AppState {
                player: Player::spawn(session),
                max_input_len,
            }),
        }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            // Stateless log tools
            .route("/api/algorithms", get(algorithms_handler))
            .route("/api/steps", post(steps_handler))
            .route("/api/reconstruct", post(reconstruct_handler))
            .route("/api/benchmark", post(benchmark_handler))
            // Session views
            .route("/api/session", get(session_handler))
            .route("/api/session/report", get(report_handler))
            .route("/api/frames", get(frames_handler))
            // Transport
            .route("/api/playback/play", post(play_handler))
            .route("/api/playback/pause", post(pause_handler))
            .route("/api/playback/reset", post(reset_handler))
            .route("/api/playback/step", post(step_handler))
            .route("/api/playback/seek", post(seek_handler))
            .route("/api/playback/speed", post(speed_handler))
            .route("/api/playback/bookmark/toggle", post(bookmark_toggle_handler))
            .route("/api/playback/bookmark/next", post(bookmark_next_handler))
            .route("/api/playback/bookmark/prev", post(bookmark_prev_handler))
            // Log replacement
            .route("/api/session/algorithm", post(algorithm_handler))
            .route("/api/session/input", post(input_handler))
            .route("/api/session/comparison", post(comparison_handler))
            // WebSocket for real-time updates
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the server on the given address.
    pub async fn serve(self, addr: SocketAddr) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Playback server running on http://{}", addr);
        axum::serve(listener, self.router()).await
    }
}

type ApiResult<T> = Result<Json<T>, StatusCode>;

fn bad_request(err: impl fmt::Display) -> StatusCode {
    warn!(%err, "rejected request");
    StatusCode::BAD_REQUEST
}

fn check_len(state: &AppState, input: &[Value]) -> Result<(), StatusCode> {
    if input.len() > state.max_input_len {
        return Err(bad_request(format_args!(
            "input of length {} exceeds maximum of {}",
            input.len(),
            state.max_input_len
        )));
    }
    Ok(())
}

// === Stateless log tools ===

#[derive(Debug, Serialize)]
struct AlgorithmInfo {
    name: Algorithm,
    complexity: Complexity,
    randomized: bool,
}

async fn algorithms_handler() -> Json<Vec<AlgorithmInfo>> {
    Json(
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| AlgorithmInfo {
                name: algorithm,
                complexity: algorithm.complexity(),
                randomized: algorithm.is_randomized(),
            })
            .collect(),
    )
}

#[derive(Deserialize)]
struct StepsRequest {
    algorithm: Algorithm,
    input: Vec<Value>,
    #[serde(default)]
    seed: Option<u64>,
}

async fn steps_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StepsRequest>,
) -> ApiResult<Vec<Step>> {
    check_len(&state, &req.input)?;
    let steps = match req.seed {
        Some(seed) => req
            .algorithm
            .generate_steps_with(&req.input, &mut StdRng::seed_from_u64(seed)),
        None => req.algorithm.generate_steps(&req.input),
    };
    debug!(algorithm = %req.algorithm, steps = steps.len(), "generated step log");
    Ok(Json(steps))
}

#[derive(Deserialize)]
struct ReconstructRequest {
    steps: Vec<Step>,
    cursor: Cursor,
    input: Vec<Value>,
}

async fn reconstruct_handler(Json(req): Json<ReconstructRequest>) -> ApiResult<Frame> {
    validate_log(&req.steps, req.input.len())
        .map_err(|(position, err)| bad_request(format_args!("step {}: {}", position, err)))?;
    Ok(Json(reconstruct(&req.steps, req.cursor, &req.input)))
}

#[derive(Deserialize)]
struct BenchmarkRequest {
    input: Vec<Value>,
}

async fn benchmark_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BenchmarkRequest>,
) -> ApiResult<Vec<BenchmarkRow>> {
    check_len(&state, &req.input)?;
    Ok(Json(benchmark(&req.input, &mut StdRng::from_entropy())))
}

// === Session views ===

async fn session_handler(State(state): State<Arc<AppState>>) -> Json<SessionStatus> {
    Json(state.player.status())
}

async fn report_handler(State(state): State<Arc<AppState>>) -> Result<String, StatusCode> {
    state
        .player
        .read(|session| session.report().map(|report| report.to_string()))
        .await
        .ok_or(StatusCode::NOT_FOUND)
}

async fn frames_handler(State(state): State<Arc<AppState>>) -> Json<Vec<LaneFrame>> {
    Json(state.player.read(Session::frames).await)
}

// === Transport ===

async fn play_handler(State(state): State<Arc<AppState>>) -> Json<SessionStatus> {
    state.player.update(Session::play).await;
    Json(state.player.status())
}

async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<SessionStatus> {
    state.player.update(Session::pause).await;
    Json(state.player.status())
}

async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<SessionStatus> {
    state.player.update(Session::reset).await;
    Json(state.player.status())
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Direction {
    Forward,
    Backward,
}

#[derive(Deserialize)]
struct StepRequest {
    direction: Direction,
}

async fn step_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StepRequest>,
) -> Json<SessionStatus> {
    match req.direction {
        Direction::Forward => state.player.update(Session::step_forward).await,
        Direction::Backward => state.player.update(Session::step_backward).await,
    }
    Json(state.player.status())
}

#[derive(Deserialize)]
struct SeekRequest {
    cursor: Cursor,
}

async fn seek_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeekRequest>,
) -> Json<SessionStatus> {
    state.player.update(|session| session.seek(req.cursor)).await;
    Json(state.player.status())
}

#[derive(Deserialize)]
struct SpeedRequest {
    speed: PlaybackSpeed,
}

async fn speed_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeedRequest>,
) -> Json<SessionStatus> {
    state.player.update(|session| session.set_speed(req.speed)).await;
    Json(state.player.status())
}

#[derive(Deserialize)]
struct BookmarkRequest {
    /// Defaults to the current step
    #[serde(default)]
    step: Option<usize>,
}

async fn bookmark_toggle_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookmarkRequest>,
) -> ApiResult<SessionStatus> {
    state
        .player
        .update(|session| {
            let step = req.step.or_else(|| session.cursor().index())?;
            session.toggle_bookmark(step)
        })
        .await
        .ok_or_else(|| bad_request("no step to bookmark"))?;
    Ok(Json(state.player.status()))
}

async fn bookmark_next_handler(State(state): State<Arc<AppState>>) -> Json<SessionStatus> {
    state.player.update(Session::seek_next_bookmark).await;
    Json(state.player.status())
}

async fn bookmark_prev_handler(State(state): State<Arc<AppState>>) -> Json<SessionStatus> {
    state.player.update(Session::seek_prev_bookmark).await;
    Json(state.player.status())
}

// === Log replacement ===

#[derive(Deserialize)]
struct AlgorithmRequest {
    algorithm: Algorithm,
}

async fn algorithm_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AlgorithmRequest>,
) -> Json<SessionStatus> {
    state
        .player
        .update(|session| session.set_algorithm(req.algorithm))
        .await;
    Json(state.player.status())
}

#[derive(Deserialize)]
struct InputRequest {
    input: Vec<Value>,
}

async fn input_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InputRequest>,
) -> ApiResult<SessionStatus> {
    state
        .player
        .update(|session| session.set_input(req.input))
        .await
        .map_err(bad_request)?;
    Ok(Json(state.player.status()))
}

#[derive(Deserialize)]
struct ComparisonRequest {
    enabled: bool,
    #[serde(default)]
    algorithms: Option<Vec<Algorithm>>,
}

async fn comparison_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ComparisonRequest>,
) -> ApiResult<SessionStatus> {
    state
        .player
        .update(|session| {
            if let Some(algorithms) = req.algorithms {
                session.set_compared(algorithms)?;
            }
            session.set_comparison(req.enabled);
            Ok::<_, sorta_playback::Error>(())
        })
        .await
        .map_err(bad_request)?;
    Ok(Json(state.player.status()))
}

// === WebSocket ===

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsCommand {
    Play,
    Pause,
    Reset,
    StepForward,
    StepBackward,
    Seek { cursor: Cursor },
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsResponse {
    Status(SessionStatus),
    Error { message: String },
}

async fn handle_ws_command(state: &AppState, cmd: WsCommand) {
    let player = &state.player;
    match cmd {
        WsCommand::Play => player.update(Session::play).await,
        WsCommand::Pause => player.update(Session::pause).await,
        WsCommand::Reset => player.update(Session::reset).await,
        WsCommand::StepForward => player.update(Session::step_forward).await,
        WsCommand::StepBackward => player.update(Session::step_backward).await,
        WsCommand::Seek { cursor } => player.update(|session| session.seek(cursor)).await,
    }
}

async fn send(socket: &mut WebSocket, response: &WsResponse) -> bool {
    let json = match serde_json::to_string(response) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to encode message: {}", e);
            return true;
        }
    };
    match socket.send(Message::Text(json.into())).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to send to client: {}", e);
            false
        }
    }
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    let mut updates = state.player.subscribe();
    let initial = WsResponse::Status(updates.borrow_and_update().clone());
    if !send(&mut socket, &initial).await {
        return;
    }

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<WsCommand>(&text) {
                            Ok(cmd) => {
                                debug!(?cmd, "client command");
                                // The resulting status arrives through `updates`
                                handle_ws_command(&state, cmd).await;
                            }
                            Err(e) => {
                                let error = WsResponse::Error { message: e.to_string() };
                                if !send(&mut socket, &error).await {
                                    break;
                                }
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        debug!("WebSocket client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let status = WsResponse::Status(updates.borrow_and_update().clone());
                if !send(&mut socket, &status).await {
                    break;
                }
            }
        }
    }
}
