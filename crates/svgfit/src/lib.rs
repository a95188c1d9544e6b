#![forbid(unsafe_code)]

//! Centering and padding analysis for SVG documents.
//!
//! The crate reconstructs the extent of the rendered geometry (paths and basic shapes) and
//! compares it against the declared `viewBox`:
//! - content bounds come from path data and shape attributes (no rendering, no transforms)
//! - curves are bounded by their control points and endpoints, arcs by their endpoints
//! - `mask`, `clipPath` and `defs` subtrees never contribute to the content box

pub mod analyze;
pub mod assess;
pub mod bounds;
pub mod config;
pub mod dom;
pub mod error;
pub mod model;
pub mod path;
pub mod viewbox;

pub use analyze::{
    AnalysisResult, analyze_directory, analyze_file, analyze_path, analyze_svg_str, any_issues,
};
pub use assess::{Assessment, Issue, Padding, assess, format_view_box, suggest_view_box};
pub use bounds::{content_bounds, element_bounds, is_non_rendered};
pub use config::AnalysisOptions;
pub use dom::SvgElement;
pub use error::{Error, Result};
pub use model::{BoundingBox, ViewBox};
pub use path::{PathCommand, parse_path, path_bounds};
pub use viewbox::{parse_view_box, resolve_view_box};
