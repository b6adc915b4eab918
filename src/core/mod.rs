//! Core types - pure path and pattern primitives shared across the crate.

mod pattern;
mod route;

pub use pattern::{PathPattern, SUBTREE_SUFFIX};
pub use route::{is_external_link, join_web_path, normalize_segment, strip_leading_slash};
