/// An axis-aligned bounding box locating one detected face.
///
/// Invariant: `x + width <= frame width` and `y + height <= frame
/// height` for the frame the detection ran on. Regions are produced
/// only by detector implementations and are immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamps a raw detector rectangle to frame bounds.
    ///
    /// Engines may report boxes that start before the frame origin or
    /// run past its edges; the clamped region upholds the bounding-box
    /// invariant. Returns `None` when nothing of the box remains.
    pub fn clamped(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        frame_width: u32,
        frame_height: u32,
    ) -> Option<Region> {
        let x1 = x.max(0) as i64;
        let y1 = y.max(0) as i64;
        let x2 = (x as i64 + width as i64).min(frame_width as i64);
        let y2 = (y as i64 + height as i64).min(frame_height as i64);
        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(Region::new(
            x1 as u32,
            y1 as u32,
            (x2 - x1) as u32,
            (y2 - y1) as u32,
        ))
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn fits_within(&self, frame_width: u32, frame_height: u32) -> bool {
        self.x as u64 + self.width as u64 <= frame_width as u64
            && self.y as u64 + self.height as u64 <= frame_height as u64
    }
}
