//! Centering/padding heuristic and viewBox suggestion.

use crate::config::AnalysisOptions;
use crate::error::{Error, Result};
use crate::model::{BoundingBox, ViewBox};
use serde::Serialize;
use std::fmt;

/// Gap between content and each viewBox edge, in percent of the viewBox width (left/right) or
/// height (top/bottom). Negative when content overflows that edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn between(view_box: &ViewBox, content: &BoundingBox) -> Self {
        Self {
            left: (content.min_x - view_box.x) / view_box.width * 100.0,
            right: (view_box.x + view_box.width - content.max_x) / view_box.width * 100.0,
            top: (content.min_y - view_box.y) / view_box.height * 100.0,
            bottom: (view_box.y + view_box.height - content.max_y) / view_box.height * 100.0,
        }
    }

    pub fn max(&self) -> f64 {
        self.left.max(self.right).max(self.top.max(self.bottom))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Signed offset in percent of the viewBox width; positive is to the right.
    ShiftedHorizontally { percent: f64 },
    /// Signed offset in percent of the viewBox height; positive is down.
    ShiftedVertically { percent: f64 },
    ExcessivePadding { max: f64 },
    UnevenHorizontalPadding { left: f64, right: f64 },
    UnevenVerticalPadding { top: f64, bottom: f64 },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Issue::ShiftedHorizontally { percent } if percent > 0.0 => {
                write!(f, "content shifted RIGHT by {percent:.1}%")
            }
            Issue::ShiftedHorizontally { percent } => {
                write!(f, "content shifted LEFT by {:.1}%", -percent)
            }
            Issue::ShiftedVertically { percent } if percent > 0.0 => {
                write!(f, "content shifted DOWN by {percent:.1}%")
            }
            Issue::ShiftedVertically { percent } => {
                write!(f, "content shifted UP by {:.1}%", -percent)
            }
            Issue::ExcessivePadding { max } => write!(f, "excessive padding (max {max:.1}%)"),
            Issue::UnevenHorizontalPadding { left, right } => {
                write!(f, "uneven horizontal padding (L:{left:.1}% R:{right:.1}%)")
            }
            Issue::UnevenVerticalPadding { top, bottom } => {
                write!(f, "uneven vertical padding (T:{top:.1}% B:{bottom:.1}%)")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub center_offset_x: f64,
    pub center_offset_y: f64,
    pub padding: Padding,
    /// In reporting order: horizontal shift, vertical shift, excessive padding, uneven
    /// horizontal padding, uneven vertical padding.
    pub issues: Vec<Issue>,
    pub suggested_view_box: ViewBox,
}

impl Assessment {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// `"OK"`, or the issue messages joined with `"; "`.
    pub fn summary(&self) -> String {
        if self.issues.is_empty() {
            return "OK".to_string();
        }
        self.issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub fn assess(
    view_box: &ViewBox,
    content: &BoundingBox,
    opts: &AnalysisOptions,
) -> Result<Assessment> {
    if !content.is_valid() {
        return Err(Error::NoContent);
    }
    if !view_box.is_usable() {
        return Err(Error::DegenerateViewBox {
            width: view_box.width,
            height: view_box.height,
        });
    }

    let center_offset_x = content.center_x() - view_box.center_x();
    let center_offset_y = content.center_y() - view_box.center_y();
    let padding = Padding::between(view_box, content);

    let mut issues = Vec::new();
    if center_offset_x.abs() > view_box.width * opts.center_tolerance_pct / 100.0 {
        issues.push(Issue::ShiftedHorizontally {
            percent: center_offset_x / view_box.width * 100.0,
        });
    }
    if center_offset_y.abs() > view_box.height * opts.center_tolerance_pct / 100.0 {
        issues.push(Issue::ShiftedVertically {
            percent: center_offset_y / view_box.height * 100.0,
        });
    }
    let max_padding = opts.max_padding_pct;
    if [padding.left, padding.right, padding.top, padding.bottom]
        .iter()
        .any(|&p| p > max_padding)
    {
        issues.push(Issue::ExcessivePadding { max: padding.max() });
    }
    if (padding.left - padding.right).abs() > opts.uneven_padding_pct {
        issues.push(Issue::UnevenHorizontalPadding {
            left: padding.left,
            right: padding.right,
        });
    }
    if (padding.top - padding.bottom).abs() > opts.uneven_padding_pct {
        issues.push(Issue::UnevenVerticalPadding {
            top: padding.top,
            bottom: padding.bottom,
        });
    }

    Ok(Assessment {
        center_offset_x,
        center_offset_y,
        padding,
        issues,
        suggested_view_box: suggest_view_box(content, opts),
    })
}

/// A frame centered on `content` with `opts.target_padding` on every side, squared when the
/// aspect ratio is close to 1.
pub fn suggest_view_box(content: &BoundingBox, opts: &AnalysisOptions) -> ViewBox {
    let content_w = content.width();
    let content_h = content.height();
    let scale = 1.0 - 2.0 * opts.target_padding;
    let mut w = content_w / scale;
    let mut h = content_h / scale;

    let aspect = w / h;
    if aspect >= opts.square_aspect_min && aspect <= opts.square_aspect_max {
        let size = w.max(h);
        w = size;
        h = size;
    }

    ViewBox::new(
        content.min_x - (w - content_w) / 2.0,
        content.min_y - (h - content_h) / 2.0,
        w,
        h,
    )
}

/// `"x y w h"` at one decimal place.
pub fn format_view_box(vb: &ViewBox) -> String {
    format!("{:.1} {:.1} {:.1} {:.1}", vb.x, vb.y, vb.width, vb.height)
}
