//! GCP integration error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GcpError {
    #[error(
        "gcloud not found. Please install the Google Cloud SDK: https://cloud.google.com/sdk/docs/install"
    )]
    GcloudNotFound,

    #[error("gcloud command failed: {0}")]
    CommandFailed(String),

    #[error("Secret access failed: {secret_id} (version {version}): {message}")]
    SecretAccessFailed {
        secret_id: String,
        version: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GcpError>;
