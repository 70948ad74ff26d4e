//! Integration test suite for batcalc.
//!
//! These tests drive the public API the way the binary does: keystrokes into
//! the engine, key events through the update loop, and key strings through
//! the headless evaluator.
//!
//! # Test Categories
//!
//! - `engine_scenarios`: Calculator behavior over whole key sequences
//! - `presentation`: Update loop, notifications and effects
//! - `headless`: The `eval` path and its JSON report
//! - `performance`: Latency thresholds for the logic thread

mod fixtures;

mod engine_scenarios;
mod headless;
mod presentation;
