pub mod client;
pub mod message;
mod sse;

pub use client::{ChatClient, ChatError};
pub use message::{ChatMessage, ChatRole};
