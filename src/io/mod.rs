//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Capacity constants and configuration defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Tiling rasterisation and PNG export
pub mod image;
/// Terminal progress reporting
pub mod progress;
/// Growth animation capture and GIF export
pub mod visualization;
