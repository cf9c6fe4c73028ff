pub const SEETA_MODEL_NAME: &str = "seeta_fd_frontal_v1.0.bin";
pub const SEETA_MODEL_URL: &str =
    "https://github.com/atomashpolskiy/rustface/raw/master/model/seeta_fd_frontal_v1.0.bin";

/// Each pyramid level shrinks candidate windows by ~10%.
pub const DETECTION_SCALE_STEP: f64 = 1.1;

/// Minimum corroboration a candidate region needs before it is accepted
/// (applied as the SeetaFace detection score threshold).
pub const MIN_NEIGHBOR_CONFIRMATIONS: u32 = 5;

/// Smallest face the detector will report, in pixels per side.
pub const MIN_FACE_SIZE: u32 = 30;

/// Overlay color (RGB) and stroke width for annotated previews.
pub const HIGHLIGHT_COLOR: [u8; 3] = [0, 255, 0];
pub const BOX_THICKNESS: u32 = 2;

pub const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

pub const DEFAULT_DATASET_DIR: &str = "dataset";
