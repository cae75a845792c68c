//! Output generation: HTML fragments, template patching and the JSON manifest.
//!
//! # Submodules
//!
//! - [`html`]: Renders the language showcase and news list fragments
//! - [`template`]: Splices fragments into the named regions of the template
//! - [`json`]: Writes the scanned structure as a JSON manifest
//!
//! # Files
//!
//! ```text
//! index_template.html   # read, never modified
//! index.html            # template with both regions replaced, overwritten each run
//! news.json             # optional, only with --json-output
//! ```

pub mod html;
pub mod json;
pub mod template;
