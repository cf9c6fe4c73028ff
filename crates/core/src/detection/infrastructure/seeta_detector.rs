use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::constants::{DETECTION_SCALE_STEP, MIN_FACE_SIZE, MIN_NEIGHBOR_CONFIRMATIONS};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model is loaded once at construction; a fresh engine is built
/// per call, so no detection state survives between requests.
pub struct SeetaDetector {
    model: rustface::Model,
}

impl SeetaDetector {
    pub fn from_model_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let bytes = fs::read(path)?;
        let model = rustface::read_model(Cursor::new(bytes))?;
        Ok(Self { model })
    }
}

impl FaceDetector for SeetaDetector {
    fn detect(&mut self, gray: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        debug_assert_eq!(gray.channels(), 1, "detector input must be grayscale");

        let mut engine = rustface::create_detector_with_model(self.model.clone());
        engine.set_min_face_size(MIN_FACE_SIZE);
        // SeetaFace has no neighbor-vote knob; the confirmation threshold
        // maps onto its detection score threshold.
        engine.set_score_thresh(MIN_NEIGHBOR_CONFIRMATIONS as f64);
        engine.set_pyramid_scale_factor((1.0 / DETECTION_SCALE_STEP) as f32);
        engine.set_slide_window_step(4, 4);

        let image = rustface::ImageData::new(gray.data(), gray.width(), gray.height());
        let faces = engine.detect(&image);
        log::debug!(
            "seeta engine reported {} candidate(s) in {}x{} frame",
            faces.len(),
            gray.width(),
            gray.height()
        );

        // The engine may report boxes that spill past the frame edges;
        // clamping keeps the bounding-box invariant for downstream crops.
        Ok(faces
            .iter()
            .filter_map(|face| {
                let bbox = face.bbox();
                Region::clamped(
                    bbox.x(),
                    bbox.y(),
                    bbox.width(),
                    bbox.height(),
                    gray.width(),
                    gray.height(),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_model_file_missing_path() {
        let result = SeetaDetector::from_model_file(Path::new("/nonexistent/model.bin"));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_model_file_garbage_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        fs::write(&path, b"not a seeta model").unwrap();
        assert!(SeetaDetector::from_model_file(&path).is_err());
    }
}
