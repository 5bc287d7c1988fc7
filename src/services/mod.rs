pub mod tile_pipeline;

pub use tile_pipeline::{PipelineReport, TilePipeline, WrittenTile, SOURCE_SUFFIX, SYMBOL_SUFFIX};
