use ndarray::{ArrayView3, ArrayViewMut3};

/// An in-memory decoded image: contiguous row-major bytes.
///
/// The decoder produces 3-channel RGB frames; `to_luma` derives the
/// 1-channel frame the detector consumes. Container format handling
/// happens at the codec boundary only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Grayscale derivation using integer BT.601 luma weights.
    ///
    /// A 1-channel frame is returned unchanged.
    pub fn to_luma(&self) -> Frame {
        if self.channels == 1 {
            return self.clone();
        }
        let luma: Vec<u8> = self
            .data
            .chunks_exact(self.channels as usize)
            .map(|px| {
                let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
                ((299 * r + 587 * g + 114 * b) / 1000) as u8
            })
            .collect();
        Frame::new(luma, self.width, self.height, 1)
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
