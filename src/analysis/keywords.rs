//! Keyword extraction over a worker subprocess
//!
//! Scoring is delegated to a single-shot worker process (the deployed setup
//! runs a Python YAKE script) speaking line-based JSON over its standard
//! streams: write `{"text": ...}` plus a newline to stdin, close the stream,
//! then read all of stdout until the process exits. One process per call,
//! never reused; concurrent calls spawn independent workers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::Settings;

/// Keyword extraction failure. Never retried; each call is all-or-nothing.
#[derive(Error, Debug)]
pub enum KeywordExtractionError {
    #[error("Failed to spawn keyword worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Keyword worker exited with {status}: {stderr}")]
    WorkerFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Keyword worker reported an error: {0}")]
    Worker(String),

    #[error("Keyword worker protocol error: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("Keyword worker timed out after {0}s")]
    Timeout(u64),

    #[error("IO error talking to keyword worker: {0}")]
    Io(#[from] std::io::Error),
}

/// Seam between the pipeline and the scoring algorithm, so the subprocess
/// worker can later be swapped for an in-process scorer.
#[async_trait]
pub trait KeywordProvider: Send + Sync {
    /// Extract ranked keywords for `text`, best first.
    async fn extract_keywords(&self, text: &str) -> Result<Vec<String>, KeywordExtractionError>;
}

#[derive(Debug, Serialize)]
struct WorkerRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct WorkerResponse {
    /// Missing on a well-formed success response means "no keywords".
    #[serde(default)]
    keywords: Vec<String>,
    /// The worker reports its own failures here, with exit code 0.
    error: Option<String>,
}

/// One-shot subprocess keyword extractor
pub struct WorkerKeywordExtractor {
    command: String,
    script: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl WorkerKeywordExtractor {
    pub fn new(command: String, script: Option<PathBuf>, timeout: Option<Duration>) -> Self {
        Self {
            command,
            script,
            timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let timeout = match settings.worker.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::new(
            settings.worker.command.clone(),
            Some(settings.worker_script_path()),
            timeout,
        )
    }

    async fn run_worker(&self, text: &str) -> Result<Vec<String>, KeywordExtractionError> {
        let mut command = Command::new(&self.command);
        if let Some(script) = &self.script {
            command.arg(script);
        }
        // kill_on_drop so a timed-out worker is reaped, not leaked
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(KeywordExtractionError::Spawn)?;

        let request = serde_json::to_vec(&WorkerRequest { text })?;
        let mut stdin = child.stdin.take().ok_or_else(|| {
            KeywordExtractionError::Io(std::io::Error::other("worker stdin was not captured"))
        })?;
        stdin.write_all(&request).await?;
        stdin.write_all(b"\n").await?;
        // Dropping stdin closes the pipe; the worker reads to EOF.
        drop(stdin);

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!("Keyword worker failed ({}): {}", output.status, stderr);
            return Err(KeywordExtractionError::WorkerFailed {
                status: output.status,
                stderr,
            });
        }

        let response: WorkerResponse = serde_json::from_slice(&output.stdout)?;
        if let Some(message) = response.error {
            return Err(KeywordExtractionError::Worker(message));
        }

        Ok(response.keywords)
    }
}

#[async_trait]
impl KeywordProvider for WorkerKeywordExtractor {
    async fn extract_keywords(&self, text: &str) -> Result<Vec<String>, KeywordExtractionError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run_worker(text))
                .await
                .map_err(|_| KeywordExtractionError::Timeout(limit.as_secs()))?,
            None => self.run_worker(text).await,
        }
    }
}
