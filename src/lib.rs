//! tile-expander - wplace overlay tile builder
//!
//! Turns a small `<prefix>_orig.png` map tile into fixed-size overlay PNGs:
//! a spaced-out dot grid, a plain enlargement, or a symbol-per-color map.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
