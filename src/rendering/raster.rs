//! In-memory RGBA8 raster.

use crate::error::ExpandError;

/// Fully transparent pixel.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// A row-major grid of RGBA8 pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Allocate a canvas with every channel of every pixel set to zero.
    pub fn new_transparent(width: u32, height: u32) -> Result<Self, ExpandError> {
        let len = buffer_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap an existing RGBA8 buffer.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ExpandError> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(ExpandError::BufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Canvas filled with a single pixel value.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Result<Self, ExpandError> {
        let mut image = Self::new_transparent(width, height)?;
        for px in image.data.chunks_exact_mut(4) {
            px.copy_from_slice(&pixel);
        }
        Ok(image)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&pixel);
    }

    /// Copy `src` onto this image with its top-left corner at `(x, y)`.
    ///
    /// All four channels are overwritten, so transparent source pixels punch
    /// holes rather than showing what was underneath. Rows and columns that
    /// fall outside this image are dropped.
    pub fn paste(&mut self, src: &RasterImage, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let cols = src.width.min(self.width - x) as usize;
        let rows = src.height.min(self.height - y);
        let row_bytes = cols * 4;

        for row in 0..rows {
            let s = src.offset(0, row);
            let d = self.offset(x, y + row);
            self.data[d..d + row_bytes].copy_from_slice(&src.data[s..s + row_bytes]);
        }
    }

    /// Copy out a `width x height` region starting at `(x, y)`.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Self, ExpandError> {
        let in_bounds = x
            .checked_add(width)
            .zip(y.checked_add(height))
            .is_some_and(|(r, b)| r <= self.width && b <= self.height);
        if !in_bounds {
            return Err(ExpandError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        let mut out = Self::new_transparent(width, height)?;
        let row_bytes = width as usize * 4;
        for row in 0..height {
            let s = self.offset(x, y + row);
            let d = out.offset(0, row);
            out.data[d..d + row_bytes].copy_from_slice(&self.data[s..s + row_bytes]);
        }
        Ok(out)
    }

    /// True if every pixel is `(0, 0, 0, 0)`.
    pub fn is_fully_transparent(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Pixels with alpha 255.
    pub fn opaque_pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; 4])> + '_ {
        let width = self.width.max(1);
        self.data
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, px)| px[3] == 255)
            .map(move |(i, px)| {
                let i = i as u32;
                (i % width, i / width, [px[0], px[1], px[2], px[3]])
            })
    }
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

fn buffer_len(width: u32, height: u32) -> Result<usize, ExpandError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(ExpandError::CanvasTooLarge {
            width: width as u64,
            height: height as u64,
        })
}
