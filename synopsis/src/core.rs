// src/core.rs
pub mod analyzer;
pub mod pipeline;
pub mod report;
pub mod request;
pub mod samples;
pub mod service;

#[cfg(test)]
pub(crate) mod test_utils;
