//! Resume scorer library

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{Result, ResumeScorerError};
pub use scoring::{JobContext, ScoreEngine, ScoreReport};
