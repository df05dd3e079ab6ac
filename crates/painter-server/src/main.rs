//! Painter server: accepts command scripts over HTTP, applies them to the
//! scene on a single execution thread, and serves the latest snapshot.

mod app;
mod frame;

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use painter_engine::coords::SurfaceSize;
use painter_engine::logging::{LoggingConfig, init_logging};
use painter_engine::surface::CpuScreen;
use painter_engine::{Generator, Loop};

use crate::app::AppState;
use crate::frame::FrameReceiver;

#[derive(Parser, Debug)]
#[command(author, version, about = "Remote-controlled scene painter")]
struct Args {
    /// Address the HTTP front end listens on
    #[arg(long, default_value = "127.0.0.1:17000")]
    listen: SocketAddr,
    /// Snapshot width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Snapshot height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,
    /// env_logger filter (e.g. "debug", "painter_lang=trace"); falls back to RUST_LOG
    #[arg(long)]
    log: Option<String>,
    /// Start from an empty scene instead of the default one
    #[arg(long)]
    blank: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match args.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    });

    let generator = Arc::new(Generator::new(CpuScreen::new()));
    if !args.blank {
        generator.seed_defaults();
    }

    let frames = Arc::new(FrameReceiver::new(
        generator.clone(),
        SurfaceSize::new(args.width, args.height),
    ));
    frames.refresh().context("render initial frame")?;

    let exec = Arc::new(Loop::new());
    exec.start(generator, frames.clone()).context("start execution loop")?;

    let app = app::router(Arc::new(AppState::new(exec.clone(), frames)));

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("bind {}", args.listen))?;
    log::info!("painter listening on {}", args.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;

    log::info!("shutting down execution loop");
    tokio::task::spawn_blocking(move || exec.terminate())
        .await
        .context("join execution loop")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to install ctrl-c handler: {err}");
        std::future::pending::<()>().await;
    }
}
