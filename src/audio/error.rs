use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Audio output device error: {0}")]
    DeviceError(String),

    #[error("Failed to read media: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch media: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("Media reference cannot be resolved: {0}")]
    Unresolved(String),
}
