//! Pure transformations on decoded frames: bounding-box overlays and
//! rectangular face crops. No side effects, deterministic output.

use crate::shared::constants::{BOX_THICKNESS, HIGHLIGHT_COLOR};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Returns a copy of `frame` with a rectangle drawn around each region.
///
/// Strokes are `BOX_THICKNESS` pixels wide and drawn inside the region
/// bounds, so they never leave the frame. Re-running on the same input
/// produces bit-identical output.
pub fn annotate(frame: &Frame, regions: &[Region]) -> Frame {
    let mut out = frame.clone();
    for region in regions {
        draw_rectangle(&mut out, region);
    }
    out
}

fn draw_rectangle(frame: &mut Frame, region: &Region) {
    debug_assert!(region.fits_within(frame.width(), frame.height()));
    let x0 = region.x as usize;
    let y0 = region.y as usize;
    let x1 = (region.x + region.width) as usize; // exclusive
    let y1 = (region.y + region.height) as usize; // exclusive
    let t = BOX_THICKNESS as usize;

    let mut px = frame.as_ndarray_mut();
    for row in y0..y1 {
        for col in x0..x1 {
            let on_stroke = row < y0 + t
                || row >= y1.saturating_sub(t)
                || col < x0 + t
                || col >= x1.saturating_sub(t);
            if on_stroke {
                for (c, &value) in HIGHLIGHT_COLOR.iter().enumerate() {
                    px[[row, col, c]] = value;
                }
            }
        }
    }
}

/// Extracts the rectangular sub-image covered by `region`.
///
/// A direct slice: no padding, no aspect-ratio correction, no clamping
/// beyond what the detector already guarantees.
pub fn crop(frame: &Frame, region: &Region) -> Frame {
    debug_assert!(region.fits_within(frame.width(), frame.height()));
    let channels = frame.channels() as usize;
    let src = frame.as_ndarray();
    let mut data = Vec::with_capacity(region.area() as usize * channels);
    for row in region.y..region.y + region.height {
        for col in region.x..region.x + region.width {
            for c in 0..channels {
                data.push(src[[row as usize, col as usize, c]]);
            }
        }
    }
    Frame::new(data, region.width, region.height, frame.channels())
}
