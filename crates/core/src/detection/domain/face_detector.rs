use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for face detection.
///
/// `gray` is the single-channel luma derivation of the request frame.
/// Returned regions are in the engine's internal scan order (not
/// spatially sorted) and must lie fully within the frame bounds.
/// Implementations hold no state between calls and are deterministic
/// for a fixed input, modulo the engine's own numeric tolerances.
pub trait FaceDetector: Send {
    fn detect(&mut self, gray: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
