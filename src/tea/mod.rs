//! The Elm Architecture (TEA) for the calculator front end.
//!
//! - `Model`: the engine plus presentation state (notification, effects)
//! - `Message`: inputs to the update function (keys, resize, ticks)
//! - `Command`: side effects for the runtime (bell, quit)
//! - `update`: pure function that transforms state

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::Command;
pub use message::Message;
pub use model::{Model, Notification, NotificationLevel};
pub use update::{input_for_key, update};
