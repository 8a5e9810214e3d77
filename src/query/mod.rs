//! Query pipeline: filter → aggregate → render.
//!
//! Every tool is the same three-step composition over an immutable
//! record collection. The pipeline owns no state between requests.

pub mod aggregate;
pub mod filter;
pub mod report;

pub use filter::{opt_bool, opt_str, req_str, FilterPipeline};
pub use report::Report;
