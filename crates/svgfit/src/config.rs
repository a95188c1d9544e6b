use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds used by the centering/padding heuristic.
///
/// Percentages are relative to the corresponding viewBox dimension. The defaults are what the
/// bounds approximation in [`crate::path`] was tuned against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisOptions {
    /// Max distance between content and viewBox centers before reporting a shift.
    pub center_tolerance_pct: f64,
    /// Any single side padding above this is excessive.
    pub max_padding_pct: f64,
    /// Max difference between opposite paddings.
    pub uneven_padding_pct: f64,
    /// Padding per side (fraction, not percent) of the suggested viewBox.
    pub target_padding: f64,
    /// Aspect ratio range in which the suggested viewBox is made square.
    pub square_aspect_min: f64,
    pub square_aspect_max: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            center_tolerance_pct: 5.0,
            max_padding_pct: 20.0,
            uneven_padding_pct: 10.0,
            target_padding: 0.05,
            square_aspect_min: 0.9,
            square_aspect_max: 1.1,
        }
    }
}

impl AnalysisOptions {
    /// Partial overrides, e.g. `{"max_padding_pct": 25}`; unspecified fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Rejects values the heuristic can't work with: non-finite numbers, a target padding that
    /// leaves no room for content, or an empty square-ify range.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("center_tolerance_pct", self.center_tolerance_pct),
            ("max_padding_pct", self.max_padding_pct),
            ("uneven_padding_pct", self.uneven_padding_pct),
            ("target_padding", self.target_padding),
            ("square_aspect_min", self.square_aspect_min),
            ("square_aspect_max", self.square_aspect_max),
        ];
        if let Some((name, v)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidOptions(format!("{name} must be finite (got {v})")));
        }
        if !(0.0..0.5).contains(&self.target_padding) {
            return Err(Error::InvalidOptions(format!(
                "target_padding must be in [0, 0.5) (got {})",
                self.target_padding
            )));
        }
        if self.square_aspect_min > self.square_aspect_max {
            return Err(Error::InvalidOptions(format!(
                "square_aspect_min ({}) exceeds square_aspect_max ({})",
                self.square_aspect_min, self.square_aspect_max
            )));
        }
        Ok(())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|e| Error::in_file(path.display().to_string(), e))
    }
}
