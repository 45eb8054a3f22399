//! Codec error type.

use quire_delta::DeltaError;
use quire_html::HtmlError;
use quire_model::{ModelError, ValidationError};

/// Error from any conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error(transparent)]
    Html(#[from] HtmlError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Delta(#[from] DeltaError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
