//! # News Index
//!
//! Regenerates the front page of a multi-language news site from a tree of
//! Markdown articles.
//!
//! ## Architecture
//!
//! A single-pass pipeline, run to completion on one thread:
//! 1. **Walk**: visit every non-hidden directory below the root ([`walker`])
//! 2. **Classify**: map `news/{lang}/{media}` or `{lang}/{media}` to a group ([`classify`])
//! 3. **Extract**: read title, date and summary from each article ([`extract`], [`scan`])
//! 4. **Render**: build the language showcase and news list, splice them into
//!    the template and write the page ([`outputs`], [`pipeline`])

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod scan;
pub mod utils;
pub mod walker;

pub use config::Settings;
pub use error::{Error, Result};
pub use models::{Article, Group, Structure};
pub use pipeline::{run, update_index, UpdateSummary};
