// Library surface for headless/integration tests and reuse.
// Terminal setup and CLI parsing stay in main.rs.
pub mod app;
pub mod arrow;
pub mod challenge;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod util;
