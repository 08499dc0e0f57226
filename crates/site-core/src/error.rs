use crate::face::Face;

/// Startup-time configuration failures.
///
/// Everything that can go wrong at runtime (rejected audio promises and the
/// like) is logged and swallowed by the host; only these are fatal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SiteError {
    #[error("playlist is empty")]
    EmptyPlaylist,
    #[error("rotation sequence is empty")]
    EmptySequence,
    #[error("no orientation configured for face `{0}`")]
    MissingOrientation(Face),
    #[error("face `{0}` has more than one navigation binding")]
    DuplicateBinding(Face),
    #[error("rotation duration must be finite and non-negative, got {0} ms")]
    InvalidDuration(f64),
    #[error("volume must be within [0, 1], got {0}")]
    InvalidVolume(f32),
    #[error("missing element #{0}")]
    MissingElement(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
