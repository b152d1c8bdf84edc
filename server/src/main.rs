//! Server binary: serve the chat endpoint, or run the console REPL with
//! `--repl`. An optional argument names a JSON config file.

mod http;
mod repl;

use std::path::Path;

use anyhow::Result;
use bookbot::{BotConfig, ChatEngine};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut repl_mode = false;
    let mut config_path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        if arg == "--repl" {
            repl_mode = true;
        } else {
            config_path = Some(arg);
        }
    }

    let config = match config_path {
        Some(path) => BotConfig::from_file(Path::new(&path)).map_err(anyhow::Error::msg)?,
        None => BotConfig::default(),
    };

    let engine = ChatEngine::from_config(&config)?;

    if repl_mode {
        repl::run(&engine)
    } else {
        http::start_server(&config, engine).await
    }
}
