use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use painter_engine::Loop;
use painter_lang::{ParseError, Parser};
use serde::Deserialize;

use crate::frame::FrameReceiver;

pub struct AppState {
    parser: Mutex<Parser>,
    exec: Arc<Loop>,
    frames: Arc<FrameReceiver>,
}

impl AppState {
    pub fn new(exec: Arc<Loop>, frames: Arc<FrameReceiver>) -> Self {
        Self { parser: Mutex::new(Parser::new()), exec, frames }
    }

    /// Parses `script` and posts whatever it flushes; returns the number of
    /// operations posted.
    ///
    /// The parser lock spans the post so batches reach the queue in the
    /// order they were parsed.
    pub fn submit(&self, script: &str) -> Result<usize, ParseError> {
        let mut parser = self.parser.lock().unwrap_or_else(PoisonError::into_inner);
        let ops = parser.parse(script)?;
        let n = ops.len();
        if n > 0 {
            self.exec.post_all(ops);
        }
        Ok(n)
    }
}

#[derive(Debug, Deserialize)]
pub struct ScriptQuery {
    cmd: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(script_from_query).post(script_from_body))
        .route("/frame.png", get(frame_png))
        .with_state(state)
}

async fn script_from_body(State(state): State<Arc<AppState>>, body: String) -> Response {
    respond(state.submit(&body))
}

async fn script_from_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScriptQuery>,
) -> Response {
    respond(state.submit(query.cmd.as_deref().unwrap_or_default()))
}

async fn frame_png(State(state): State<Arc<AppState>>) -> Response {
    match state.frames.png() {
        Some(Ok(bytes)) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Some(Err(err)) => {
            log::error!("png encoding failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

fn respond(result: Result<usize, ParseError>) -> Response {
    match result {
        Ok(n) => {
            log::debug!("posted {n} operation(s)");
            StatusCode::OK.into_response()
        }
        Err(err) => {
            log::warn!("rejected script: {err}");
            (StatusCode::BAD_REQUEST, format!("An error occurred: {err}")).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use painter_engine::coords::SurfaceSize;
    use painter_engine::surface::CpuScreen;
    use painter_engine::exec::LoopState;
    use painter_engine::paint::Color;
    use painter_engine::{Generator, Receiver};
    use std::sync::mpsc;
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    fn state() -> Arc<AppState> {
        let generator = Arc::new(Generator::new(CpuScreen::new()));
        let frames = Arc::new(FrameReceiver::new(generator, SurfaceSize::new(64, 64)));
        Arc::new(AppState::new(Arc::new(Loop::new()), frames))
    }

    /// Forwards each notification to the real frame receiver, then reports it.
    struct Notify {
        frames: Arc<FrameReceiver>,
        tx: Mutex<mpsc::Sender<()>>,
    }

    impl Receiver for Notify {
        fn update(&self) {
            self.frames.update();
            let _ = self.tx.lock().unwrap().send(());
        }
    }

    /// Started loop wired to a real generator and frame receiver.
    fn running() -> (Arc<AppState>, mpsc::Receiver<()>) {
        let generator = Arc::new(Generator::new(CpuScreen::new()));
        let frames = Arc::new(FrameReceiver::new(generator.clone(), SurfaceSize::new(64, 64)));
        let (tx, rx) = mpsc::channel();
        let notify = Arc::new(Notify { frames: frames.clone(), tx: Mutex::new(tx) });

        let exec = Arc::new(Loop::new());
        exec.start(generator, notify).unwrap();
        (Arc::new(AppState::new(exec, frames)), rx)
    }

    fn wait_for(rx: &mpsc::Receiver<()>, n: usize) {
        for _ in 0..n {
            rx.recv_timeout(WAIT).unwrap();
        }
    }

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    // ── submit ────────────────────────────────────────────────────────────

    #[test]
    fn submit_posts_only_flushed_batches() {
        let state = state();
        assert_eq!(state.submit("figure 0.1 0.1").unwrap(), 0);
        assert_eq!(state.exec.pending(), 0);
        assert_eq!(state.submit("white\nupdate").unwrap(), 2);
        assert_eq!(state.exec.pending(), 2);
    }

    #[test]
    fn submit_error_posts_nothing() {
        let state = state();
        assert!(state.submit("white\nfigure 1\nupdate").is_err());
        assert_eq!(state.exec.pending(), 0);
    }

    // ── pipeline ──────────────────────────────────────────────────────────

    #[test]
    fn submitted_batch_reaches_the_frame() {
        let (state, rx) = running();
        assert_eq!(state.submit("white\nfigure 0.25 0.25\nupdate").unwrap(), 2);
        wait_for(&rx, 2);

        state.frames.with_latest(|s| {
            let s = s.unwrap();
            assert_eq!(s.pixel(2, 2), Some(Color::WHITE));
            assert_eq!(s.pixel(16, 12), Some(Color::FIGURE));
        });
        state.exec.terminate();
    }

    #[test]
    fn out_of_range_figures_do_not_stall_the_loop() {
        let (state, rx) = running();
        assert_eq!(state.submit("figure inf 0.5\nfigure -1e12 0.5\nfigure 0.5 nan\nupdate").unwrap(), 3);
        wait_for(&rx, 3);

        assert_eq!(state.submit("green & update").unwrap(), 1);
        wait_for(&rx, 1);

        assert_eq!(state.exec.state(), LoopState::Running);
        state.frames.with_latest(|s| assert_eq!(s.unwrap().pixel(60, 60), Some(Color::GREEN)));
        state.exec.terminate();
    }

    // ── handlers ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn body_script_ok() {
        let state = state();
        let resp = script_from_body(State(state.clone()), "reset".to_string()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(state.exec.pending(), 1);
    }

    #[tokio::test]
    async fn query_script_ok_and_missing_cmd() {
        let state = state();
        let q = ScriptQuery { cmd: Some("green & update".to_string()) };
        let resp = script_from_query(State(state.clone()), Query(q)).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = script_from_query(State(state.clone()), Query(ScriptQuery { cmd: None })).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(state.exec.pending(), 1);
    }

    #[tokio::test]
    async fn parse_error_is_bad_request() {
        let resp = script_from_body(State(state()), "paint 1".to_string()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(resp).await, "An error occurred: line 1: unknown command \"paint\"");
    }

    #[tokio::test]
    async fn frame_unavailable_until_first_snapshot() {
        let state = state();
        assert_eq!(frame_png(State(state.clone())).await.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.frames.refresh().unwrap();
        let resp = frame_png(State(state)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/png");
    }
}
