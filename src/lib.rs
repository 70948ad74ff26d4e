pub mod config;
pub mod engine;
pub mod error;
pub mod headless;
pub mod log;

// Decoupled game loop architecture
pub mod actors;
pub mod app;
pub mod effects;
pub mod render;
pub mod tea;
pub mod ui;

pub use engine::{EngineEvent, ExpressionEngine, Input, Operator};
pub use error::{Error, Result};
