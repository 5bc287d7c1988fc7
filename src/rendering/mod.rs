pub mod expand;
pub mod png_io;
pub mod raster;
pub mod symbol_table;

pub use expand::{
    expand_sparse, expand_symbolic, place_sparse, place_symbols, resize_nearest, Placement,
};
pub use raster::{RasterImage, TRANSPARENT};
pub use symbol_table::SymbolTable;
