// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod bible;
pub mod comparison;
pub mod content;
pub mod drag_drop;
pub mod fash;
pub mod game_timers;
pub mod guess_game;
pub mod history_csv;
pub mod mode_config;
pub mod progress;
pub mod reference;
pub mod rlhelper;
pub mod scoring;
pub mod template;

// RUST_LOG wins, otherwise info for this crate.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vega=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
