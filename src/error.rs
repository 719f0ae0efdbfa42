use thiserror::Error;

/// Error types for `MemoryStream` operations
///
/// Every variant leaves the stream unchanged: a failed seek keeps the
/// position, a failed exact read consumes nothing, a failed write
/// writes nothing.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum StreamError {
    /// Seek target is outside `0..=count`
    #[error("Invalid seek offset: target is outside of the stream")]
    InvalidSeekOffset,
    /// Exact read requested more bytes than remain after the cursor
    #[error("Insufficient data: not enough bytes remain in the stream")]
    InsufficientData,
    /// Write would exceed the capacity of a non-expandable stream
    #[error("Not enough space: write exceeds the stream capacity")]
    NotEnoughSpace,
}

impl embedded_io::Error for StreamError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            StreamError::InvalidSeekOffset => embedded_io::ErrorKind::InvalidInput,
            StreamError::InsufficientData => embedded_io::ErrorKind::Other,
            StreamError::NotEnoughSpace => embedded_io::ErrorKind::OutOfMemory,
        }
    }
}

#[cfg(feature = "std")]
impl From<StreamError> for std::io::Error {
    fn from(err: StreamError) -> Self {
        let kind = match err {
            StreamError::InvalidSeekOffset => std::io::ErrorKind::InvalidInput,
            StreamError::InsufficientData => std::io::ErrorKind::UnexpectedEof,
            StreamError::NotEnoughSpace => std::io::ErrorKind::WriteZero,
        };
        std::io::Error::new(kind, err)
    }
}
