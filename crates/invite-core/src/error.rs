use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WallError {
    #[error("light wall palette is empty")]
    EmptyPalette,
}

/// A play request the host refused, typically its autoplay policy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("play request rejected: {0}")]
    Rejected(String),
}
