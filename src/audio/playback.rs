use std::sync::Arc;

use rodio::{OutputStream, Sink};

use crate::audio::AudioError;

/// One output stream, one sink, for the lifetime of the app. The stream
/// handle must stay alive for the sink to keep producing sound; it is not
/// `Send`, so background tasks only ever get the `Arc<Sink>`.
pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Arc<Sink>,
}

impl PlaybackEngine {
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| AudioError::Device(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            sink: Arc::new(sink),
        })
    }

    pub fn sink(&self) -> Arc<Sink> {
        self.sink.clone()
    }
}
