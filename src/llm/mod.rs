//! LLM module
//!
//! A non-streaming client for OpenAI-compatible chat completion APIs
//! (OpenRouter, OpenAI, local gateways).

mod client;
mod format;
mod openai;
mod types;

pub use client::LlmClient;
pub use types::*;
