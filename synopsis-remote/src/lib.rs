// src/lib.rs
//! Blocking client for hosted summarization models that speak the
//! Hugging Face Inference API format.
//!
//! One request is in flight at a time and failed requests are never retried;
//! the caller decides what to do with a [`RemoteError`].

mod client;
mod error;
mod wire;

pub use client::InferenceClient;
pub use error::RemoteError;
pub use wire::GenerationParameters;
