use thiserror::Error;

use crate::codec::decode::DecodeError;
use crate::codec::encode::EncodeError;
use crate::dataset::dataset_writer::DatasetError;

/// Failure taxonomy for one request. Every failure short-circuits the
/// pipeline at its stage boundary; nothing is retried or partially
/// recovered.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no image received")]
    InputMissing,
    #[error("failed to decode image: {0}")]
    Decode(#[from] DecodeError),
    #[error("face detection failed: {0}")]
    Detector(String),
    #[error(transparent)]
    Persistence(#[from] DatasetError),
    #[error("failed to encode response image: {0}")]
    Encode(#[from] EncodeError),
}

impl PipelineError {
    /// Client-class failures (bad or missing input) map to a 4xx-style
    /// outcome at the transport; the rest are server-class.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InputMissing | Self::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_and_decode_failures_are_client_class() {
        assert!(PipelineError::InputMissing.is_client_error());
        assert!(PipelineError::Decode(DecodeError::Empty).is_client_error());
    }

    #[test]
    fn test_detector_and_persistence_failures_are_server_class() {
        assert!(!PipelineError::Detector("engine state corrupt".into()).is_client_error());
        let persistence = PipelineError::Persistence(DatasetError::Write {
            path: "dataset/alice/alice_0.jpg".into(),
            source: std::io::Error::other("disk full"),
        });
        assert!(!persistence.is_client_error());
    }

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(PipelineError::InputMissing.to_string(), "no image received");
        assert!(PipelineError::Detector("boom".into())
            .to_string()
            .contains("boom"));
    }
}
