use crate::dom::{SvgElement, parse_length};
use crate::error::{Error, Result};
use crate::model::ViewBox;

/// Parses `"x y width height"`. Commas are accepted as separators, as in SVG's list syntax.
pub fn parse_view_box(raw: &str) -> Result<ViewBox> {
    let buf = raw.replace(',', " ");
    let parts: Vec<&str> = buf.split_whitespace().collect();
    let [x, y, w, h] = parts.as_slice() else {
        return Err(Error::InvalidViewBox(raw.to_string()));
    };
    // `str::parse` accepts `NaN`/`inf`, which are not SVG numbers.
    let num = |s: &str| match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidViewBox(raw.to_string())),
    };
    Ok(ViewBox::new(num(*x)?, num(*y)?, num(*w)?, num(*h)?))
}

/// Resolves the document frame from the root's `viewBox`, falling back to `width`/`height` with an
/// origin of `(0, 0)`.
///
/// A present but malformed `viewBox` is an error; the fallback only applies when the attribute is
/// absent.
pub fn resolve_view_box(root: &SvgElement) -> Result<ViewBox> {
    let vb = match root.attr("viewBox") {
        Some(raw) => parse_view_box(raw)?,
        None => {
            let w = root.attr("width").and_then(parse_length).unwrap_or(0.0);
            let h = root.attr("height").and_then(parse_length).unwrap_or(0.0);
            if !(w > 0.0 && h > 0.0) {
                return Err(Error::MissingViewBox);
            }
            tracing::debug!(width = w, height = h, "no viewBox; using width/height");
            ViewBox::new(0.0, 0.0, w, h)
        }
    };
    if !vb.is_usable() {
        return Err(Error::DegenerateViewBox {
            width: vb.width,
            height: vb.height,
        });
    }
    Ok(vb)
}
