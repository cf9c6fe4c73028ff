//! Face capture pipeline: decode a single image, locate faces, produce
//! an annotated preview plus per-face crops, and optionally persist
//! labeled crops to a per-username dataset directory.

pub mod annotation;
pub mod codec;
pub mod dataset;
pub mod detection;
pub mod pipeline;
pub mod shared;
