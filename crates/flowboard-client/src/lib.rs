#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
mod types;

pub use client::FlowboardClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
pub use error::{Error, Result};
pub use types::{
    DefinitionFormat, PipelineDraft, PipelineDraftBuilder, PipelineId, PipelineRecord, RunReceipt,
    RunRequest,
};

/// Tracing target for client operations.
pub const TRACING_TARGET: &str = "flowboard_client";
