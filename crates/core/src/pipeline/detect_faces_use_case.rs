use crate::annotation;
use crate::codec::decode::{decode_base64_image, decode_image};
use crate::codec::encode::encode_data_url;
use crate::dataset::dataset_writer::DatasetWriter;
use crate::detection::domain::face_detector::FaceDetector;
use crate::pipeline::error::PipelineError;
use crate::pipeline::face_request::FaceRequest;
use crate::shared::frame::Frame;

/// Successful outcome of one request, before response serialization.
#[derive(Debug, Clone)]
pub struct FaceReport {
    /// Data-URL of the input with detection rectangles drawn on it.
    pub annotated: String,
    /// Data-URLs of the face crops, in detection order.
    pub faces: Vec<String>,
    pub count: usize,
    pub saved: usize,
}

/// End-to-end capture pipeline for one request:
/// resolve input → decode → detect → annotate/crop → persist → encode.
///
/// Stages run strictly in order on the calling thread; the first
/// failure short-circuits the request. No state survives across
/// requests — the dataset directory tree is the only shared resource,
/// and it is intentionally unsynchronized (see [`DatasetWriter`]).
pub struct DetectFacesUseCase {
    detector: Box<dyn FaceDetector>,
    dataset: DatasetWriter,
}

impl DetectFacesUseCase {
    pub fn new(detector: Box<dyn FaceDetector>, dataset: DatasetWriter) -> Self {
        Self { detector, dataset }
    }

    pub fn execute(&mut self, request: &FaceRequest) -> Result<FaceReport, PipelineError> {
        let frame = resolve_input(request)?;

        let gray = frame.to_luma();
        let regions = self
            .detector
            .detect(&gray)
            .map_err(|e| PipelineError::Detector(e.to_string()))?;
        log::debug!(
            "detected {} face(s) in {}x{} frame",
            regions.len(),
            frame.width(),
            frame.height()
        );

        // Annotation and cropping always run, even when nothing will be saved.
        let annotated = annotation::annotate(&frame, &regions);
        let crops: Vec<Frame> = regions.iter().map(|r| annotation::crop(&frame, r)).collect();

        let saved = match request.effective_username() {
            Some(username) => {
                let saved = self.dataset.save_crops(username, &crops)?;
                log::info!("saved {saved} crop(s) for user {username}");
                saved
            }
            None => 0,
        };

        let faces = crops
            .iter()
            .map(encode_data_url)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FaceReport {
            annotated: encode_data_url(&annotated)?,
            faces,
            count: regions.len(),
            saved,
        })
    }
}

/// Picks exactly one input source. Non-empty uploaded bytes take
/// precedence over a base64 payload; this ordering is an observable
/// contract.
fn resolve_input(request: &FaceRequest) -> Result<Frame, PipelineError> {
    if let Some(bytes) = request.image.as_deref() {
        if !bytes.is_empty() {
            return Ok(decode_image(bytes)?);
        }
    }
    if let Some(payload) = request.image_base64.as_deref() {
        if !payload.is_empty() {
            return Ok(decode_base64_image(payload)?);
        }
    }
    Err(PipelineError::InputMissing)
}
