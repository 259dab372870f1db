//! Transcript ingestion for candor
//!
//! Turns an uploaded file or pasted text into one canonical transcript string.

mod normalize;

pub use normalize::{normalize, FileInput, TranscriptText};
