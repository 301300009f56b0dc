use crate::fetch::error::FetchError;
use crate::render::error::RenderError;
use crate::transform::error::TransformError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteoplotError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
