//! Report module for writing extraction results
//!
//! This module handles:
//! - Selecting the output sink (standard output or a created file)
//! - Writing the labeled report sections
//! - The trailing warning for an unrecognized extraction mode

mod sink;
mod writer;

pub use sink::Sink;
pub use writer::write_report;
