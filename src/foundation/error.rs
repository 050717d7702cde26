/// Convenience result type used across imgconcat.
pub type ConcatResult<T> = Result<T, ConcatError>;

/// Top-level error taxonomy used by the composition pipeline and its callers.
#[derive(thiserror::Error, Debug)]
pub enum ConcatError {
    /// A source could not be decoded as an image.
    #[error("decode error: {source_name}: {message}")]
    Decode {
        /// File name or path of the offending source.
        source_name: String,
        /// Decoder message.
        message: String,
    },

    /// No images were available to compose.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Structurally invalid configuration (negative bounds, oversized canvas).
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Caller-level validation failure (missing folder, empty selection).
    #[error("validation error: {0}")]
    Validation(String),

    /// A client-supplied path resolved outside the allowed root.
    #[error("path outside root: {0}")]
    PathOutsideRoot(String),

    /// The encoder rejected the composed canvas.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConcatError {
    /// Build a [`ConcatError::Decode`] value.
    pub fn decode(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Build a [`ConcatError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build a [`ConcatError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`ConcatError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ConcatError::PathOutsideRoot`] value.
    pub fn path_outside_root(msg: impl Into<String>) -> Self {
        Self::PathOutsideRoot(msg.into())
    }

    /// Build a [`ConcatError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// `true` for errors caused by the request rather than the environment.
    ///
    /// Callers that speak HTTP map these to a 4xx-style response.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Other(_) | Self::Encode(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
