//! Single-file and batch analysis.

use crate::assess::{Issue, Padding, assess, format_view_box};
use crate::bounds::content_bounds;
use crate::config::AnalysisOptions;
use crate::dom::SvgElement;
use crate::error::{Error, Result};
use crate::model::{BoundingBox, ViewBox};
use crate::viewbox::resolve_view_box;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub file_path: PathBuf,
    /// `None` for batch entries that failed before a frame was resolved.
    pub view_box: Option<ViewBox>,
    pub content_box: Option<BoundingBox>,
    pub center_offset_x: f64,
    pub center_offset_y: f64,
    pub padding: Padding,
    pub issues: Vec<Issue>,
    /// `"OK"`, the `"; "`-joined issue messages, or `"Error: <reason>"` for failed batch entries.
    pub assessment: String,
    pub suggested_view_box: Option<String>,
    pub has_issues: bool,
}

impl AnalysisResult {
    /// Batch entry standing in for a file that could not be analyzed.
    pub fn from_error(file_path: impl Into<PathBuf>, err: &Error) -> Self {
        Self {
            file_path: file_path.into(),
            view_box: None,
            content_box: None,
            center_offset_x: 0.0,
            center_offset_y: 0.0,
            padding: Padding::default(),
            issues: Vec::new(),
            assessment: format!("Error: {}", err.reason()),
            suggested_view_box: None,
            has_issues: true,
        }
    }

    pub fn is_error(&self) -> bool {
        self.view_box.is_none()
    }
}

fn analyze_document(
    file_path: &Path,
    root: &SvgElement,
    opts: &AnalysisOptions,
) -> Result<AnalysisResult> {
    if root.name != "svg" {
        tracing::debug!(path = %file_path.display(), root = %root.name, "root element is not <svg>");
    }
    let view_box = resolve_view_box(root)?;
    let content = content_bounds(root);
    let a = assess(&view_box, &content, opts)?;

    tracing::debug!(
        path = %file_path.display(),
        view_box = %format_view_box(&view_box),
        content = ?(content.min_x, content.min_y, content.max_x, content.max_y),
        issues = a.issues.len(),
        "analyzed"
    );

    Ok(AnalysisResult {
        file_path: file_path.to_path_buf(),
        view_box: Some(view_box),
        content_box: Some(content),
        center_offset_x: a.center_offset_x,
        center_offset_y: a.center_offset_y,
        padding: a.padding,
        assessment: a.summary(),
        has_issues: a.has_issues(),
        suggested_view_box: Some(format_view_box(&a.suggested_view_box)),
        issues: a.issues,
    })
}

/// Analyzes in-memory markup; `file_path` only labels the result and errors.
pub fn analyze_svg_str(
    file_path: impl AsRef<Path>,
    text: &str,
    opts: &AnalysisOptions,
) -> Result<AnalysisResult> {
    let file_path = file_path.as_ref();
    let run = || -> Result<AnalysisResult> {
        let root = SvgElement::parse_document(text)?;
        analyze_document(file_path, &root, opts)
    };
    run().map_err(|e| Error::in_file(file_path.display().to_string(), e))
}

pub fn analyze_file(path: impl AsRef<Path>, opts: &AnalysisOptions) -> Result<AnalysisResult> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    analyze_svg_str(path, &text, opts)
}

fn is_svg_file_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".svg")
}

/// Analyzes the `.svg` files directly inside `dir` (no recursion), in file-name order.
///
/// Only an unreadable directory is an error; every per-file failure becomes an error entry
/// (see [`AnalysisResult::from_error`]) and the batch continues.
pub fn analyze_directory(
    dir: impl AsRef<Path>,
    opts: &AnalysisOptions,
) -> Result<Vec<AnalysisResult>> {
    let dir = dir.as_ref();
    let read_dir_err = |source: std::io::Error| Error::ReadDir {
        path: dir.display().to_string(),
        source,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_dir() {
            continue;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !is_svg_file_name(&name) {
            tracing::debug!(path = %path.display(), "skipping non-svg entry");
            continue;
        }
        files.push(path);
    }
    files.sort();

    let results = files
        .into_iter()
        .map(|path| match analyze_file(&path, opts) {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err.reason(), "analysis failed");
                AnalysisResult::from_error(path, &err)
            }
        })
        .collect();
    Ok(results)
}

/// A directory is analyzed as a batch, anything else as a single file.
pub fn analyze_path(path: impl AsRef<Path>, opts: &AnalysisOptions) -> Result<Vec<AnalysisResult>> {
    let path = path.as_ref();
    if path.is_dir() {
        analyze_directory(path, opts)
    } else {
        Ok(vec![analyze_file(path, opts)?])
    }
}

/// Aggregate failure signal: true when any result has issues (error entries included).
pub fn any_issues(results: &[AnalysisResult]) -> bool {
    results.iter().any(|r| r.has_issues)
}
