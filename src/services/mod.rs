pub mod clean_pipeline;
pub mod raw_reader;

pub use clean_pipeline::{CleanPipeline, CleanRequest, CleanSummary, CleanedImage};
pub use raw_reader::{decode_raw, encode_raw, read_raw};
