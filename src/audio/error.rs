use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AudioError {
    #[error("audio output device error: {0}")]
    Device(String),

    #[error("decoding error: {0}")]
    Decode(String),

    #[error("network error: {0}")]
    Network(String),
}
