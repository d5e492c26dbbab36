pub mod pipeline;
pub mod segmenter;

// Re-export main types for convenient access
pub use segmenter::{
    classify, desegment_text, normalize_text, CharClass, Segmenter, SegmenterConfig, Token,
    TokenKind,
};

// Re-export pipeline types used by the CLI and external callers
pub use pipeline::{process_stream, PipelineConfig, ProcessingMode, ProcessingStats};
