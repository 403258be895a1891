use thiserror::Error;

use crate::core::ControlId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Control not found: {0}")]
    ControlNotFound(ControlId),

    #[error("Texture region not found: {0}")]
    RegionNotFound(String),

    #[error("Background region '{0}' requested but no texture atlas was supplied")]
    MissingAtlas(String),
}

pub type Result<T> = std::result::Result<T, Error>;
