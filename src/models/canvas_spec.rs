use crate::error::ExpandError;

/// Fixed square output sizes for expanded tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    pub size: u32,
}

impl CanvasSpec {
    /// Dense overlay: 2000x2000
    pub const SMALL: Self = Self { size: 2000 };

    /// Bordered overlay: 3000x3000
    pub const STANDARD: Self = Self { size: 3000 };

    /// Symbol overlay: 7000x7000
    pub const SYMBOL: Self = Self { size: 7000 };

    /// Resolve a configured edge length to one of the supported sizes
    pub fn from_size(size: u32) -> Result<Self, ExpandError> {
        match size {
            2000 => Ok(Self::SMALL),
            3000 => Ok(Self::STANDARD),
            7000 => Ok(Self::SYMBOL),
            other => Err(ExpandError::UnsupportedSize(other)),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size
    }
}
