//! ATS compatibility scoring engine
//!
//! Pure, deterministic scoring of extracted resume text: five independent
//! category passes (keywords, education, experience, skills, formatting)
//! over static keyword tables, combined into a 0-100 total with tiered
//! feedback. No I/O and no shared state; safe to call concurrently.

pub mod engine;
pub mod job_context;
pub mod report;
pub mod tables;

pub use engine::ScoreEngine;
pub use job_context::JobContext;
pub use report::{CategoryScores, ScoreReport};
