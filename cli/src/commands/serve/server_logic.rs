//! # Bloombot HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! This module implements the web shell around the intent pipeline for the
//! `bloombot serve` command:
//! - The chat page (`GET /`) showing the caller's transcript
//! - Message submission (`POST /send`) and transcript clearing (`POST /clear`)
//! - A stateless JSON endpoint (`POST /api/reply`)
//! - Port availability checking with automatic fallback
//! - Graceful shutdown handling
//!
//! ## Architecture
//!
//! Each route is a named handler function. Handlers share an `AppState`
//! holding the trained `Dispatcher` (read-only), the page renderer, the
//! session store and the clock. Form submissions answer with a `303 See Other`
//! redirect back to `/`, so reloading the page never resubmits a message.
//!
use super::config::ServerConfig;
use super::sessions::{SessionId, SessionStore};
use crate::chat::{Clock, SystemClock};
use crate::core::config::PageConfig;
use crate::core::error::Result;
use crate::core::templating::PageRenderer;
use crate::intent::{Dispatcher, Reply};
use anyhow::Context;
use axum::{
    extract::{Form, Json, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, warn, Level};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub renderer: Arc<PageRenderer>,
    pub sessions: SessionStore,
    pub page: Arc<PageConfig>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        page: PageConfig,
        sessions: SessionStore,
    ) -> Result<Self> {
        Ok(Self {
            dispatcher,
            renderer: Arc::new(PageRenderer::new()?),
            sessions,
            page: Arc::new(page),
            clock: Arc::new(SystemClock),
        })
    }
}

/// Form body of `POST /send`.
#[derive(Debug, Deserialize)]
pub struct SendForm {
    #[serde(default)]
    pub message: String,
}

/// JSON body of `POST /api/reply`.
#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub message: String,
}

/// # Run HTTP Server (`run_server`)
///
/// Binds the first free port at or after the configured one, prints the
/// page URL and serves until Ctrl+C or SIGTERM.
///
/// ## Errors
///
/// - No free port within the attempted range.
/// - Binding the listener fails (e.g. permissions).
/// - The server itself fails while running.
pub async fn run_server(config: ServerConfig, dispatcher: Arc<Dispatcher>) -> Result<()> {
    let max_port_attempts = 10;
    let addr = find_available_port(config.host, config.port, max_port_attempts).await?;

    let sessions = SessionStore::new(config.max_sessions, config.session_idle);
    let state = AppState::new(dispatcher, config.page.clone(), sessions)?;
    let app = create_app(state, config.enable_cors);

    println!("\n=================================================================");
    println!("{}", config.page.title);
    println!("🌐 Chat page:         http://{}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!(
        "💬 Sessions:          up to {}, idle timeout {}s",
        config.max_sessions,
        config.session_idle.as_secs()
    );
    println!("=================================================================\n");

    info!("Starting chat server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port`, then the following ports, up to `max_attempts` in total.
async fn find_available_port(
    req_host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, successfully bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(port) => port,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// # Create Axum Application (`create_app`)
///
/// Registers the chat handlers and wraps them in tracing and CORS middleware.
pub fn create_app(state: AppState, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(show_chat))
        .route("/send", post(send_message))
        .route("/clear", post(clear_chat))
        .route("/api/reply", post(api_reply))
        .route("/healthz", get(healthz))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
}

/// Attaches the session cookie when the id was minted for this request.
fn with_session_cookie(mut response: Response, session: SessionId) -> Response {
    if session.is_new {
        if let Some(cookie) = session.cookie() {
            response.headers_mut().append(header::SET_COOKIE, cookie);
        }
    }
    response
}

/// `GET /`: the chat page with the caller's transcript.
async fn show_chat(State(state): State<AppState>, headers: axum::http::HeaderMap) -> Response {
    let session = SessionId::from_headers(&headers);
    let entries = state.sessions.entries(session.id).await;

    let response = match state.renderer.render_chat(&state.page, &entries) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render chat page: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render the chat page.",
            )
                .into_response()
        }
    };
    with_session_cookie(response, session)
}

/// `POST /send`: submit one message for the caller's session.
async fn send_message(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
    Form(form): Form<SendForm>,
) -> Response {
    let session = SessionId::from_headers(&headers);

    let exchange = state
        .sessions
        .submit(
            session.id,
            &state.dispatcher,
            &form.message,
            state.clock.as_ref(),
        )
        .await;
    match exchange {
        Some(exchange) => debug!(
            "Session {} -> intent '{}' ({} sessions held)",
            session.id,
            exchange.intent,
            state.sessions.session_count()
        ),
        None => debug!("Ignoring blank message from session {}", session.id),
    }

    with_session_cookie(Redirect::to("/").into_response(), session)
}

/// `POST /clear`: empty the caller's transcript.
async fn clear_chat(State(state): State<AppState>, headers: axum::http::HeaderMap) -> Response {
    let session = SessionId::from_headers(&headers);
    state.sessions.clear(session.id).await;
    with_session_cookie(Redirect::to("/").into_response(), session)
}

/// `POST /api/reply`: classify one message without touching any transcript.
async fn api_reply(
    State(state): State<AppState>,
    Json(request): Json<ReplyRequest>,
) -> std::result::Result<Json<Reply>, StatusCode> {
    state
        .dispatcher
        .dispatch(&request.message)
        .map(Json)
        .ok_or(StatusCode::NO_CONTENT)
}

async fn healthz() -> &'static str {
    "ok"
}
