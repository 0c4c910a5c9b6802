//! Resume building: remote draft generation and PDF rendering
//!
//! Separate pathway from the scoring engine: free-text personal info goes to
//! a remote generative text service, and the returned draft is laid out into
//! a fixed-section PDF.

pub mod generator;
pub mod pdf;
pub mod prompts;

pub use generator::{ResumeDraft, ResumeGenerator};
