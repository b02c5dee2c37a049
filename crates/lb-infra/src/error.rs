use lb_core::ids::LinkId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("link document {0} not found")]
    LinkNotFound(LinkId),

    #[error("no blob stored under `{0}`")]
    BlobNotFound(String),

    #[error("invalid blob key `{0}`")]
    InvalidKey(String),
}
