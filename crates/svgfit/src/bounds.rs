//! Per-element geometry and bottom-up aggregation over the element tree.

use crate::dom::SvgElement;
use crate::model::BoundingBox;
use crate::path::{parse_numbers, path_bounds};

/// Subtrees that define paint servers, clipping or masking regions rather than visible content.
///
/// Used both for the root's children and at every recursion level.
pub fn is_non_rendered(name: &str) -> bool {
    matches!(name, "mask" | "clipPath" | "defs")
}

/// Bounds of the element's own shape (children excluded).
fn shape_bounds(el: &SvgElement) -> BoundingBox {
    let f = |key: &str| el.float_attr(key, 0.0);
    match el.name.as_str() {
        "path" => el.attr("d").map(path_bounds).unwrap_or_default(),
        "circle" => {
            let (cx, cy, r) = (f("cx"), f("cy"), f("r"));
            BoundingBox::from_points([(cx - r, cy - r), (cx + r, cy + r)])
        }
        "ellipse" => {
            let (cx, cy, rx, ry) = (f("cx"), f("cy"), f("rx"), f("ry"));
            BoundingBox::from_points([(cx - rx, cy - ry), (cx + rx, cy + ry)])
        }
        // Corner radii (`rx`/`ry`) never move the outer edges.
        "rect" => {
            let (x, y, w, h) = (f("x"), f("y"), f("width"), f("height"));
            BoundingBox::from_points([(x, y), (x + w, y + h)])
        }
        "line" => BoundingBox::from_points([(f("x1"), f("y1")), (f("x2"), f("y2"))]),
        "polygon" | "polyline" => el.attr("points").map(points_bounds).unwrap_or_default(),
        _ => BoundingBox::new(),
    }
}

/// `points="x1,y1 x2,y2 ..."`; a trailing odd coordinate is ignored.
fn points_bounds(points: &str) -> BoundingBox {
    let nums = parse_numbers(points);
    BoundingBox::from_points(nums.chunks_exact(2).map(|p| (p[0], p[1])))
}

/// Bounds of `el` merged with all rendered descendants.
pub fn element_bounds(el: &SvgElement) -> BoundingBox {
    let mut b = shape_bounds(el);
    b.merge(&children_bounds(el));
    b
}

fn children_bounds(el: &SvgElement) -> BoundingBox {
    let mut b = BoundingBox::new();
    for child in &el.children {
        if is_non_rendered(&child.name) {
            tracing::trace!(element = %child.name, "skipping non-rendered subtree");
            continue;
        }
        b.merge(&element_bounds(child));
    }
    b
}

/// Content box of a document: the merged bounds of the root's rendered children.
pub fn content_bounds(root: &SvgElement) -> BoundingBox {
    children_bounds(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(name: &str, attrs: &[(&str, &str)]) -> SvgElement {
        attrs
            .iter()
            .fold(SvgElement::new(name), |e, (k, v)| e.with_attr(*k, *v))
    }

    fn tuple(b: &BoundingBox) -> (f64, f64, f64, f64) {
        (b.min_x, b.min_y, b.max_x, b.max_y)
    }

    #[test]
    fn basic_shapes() {
        let c = el("circle", &[("cx", "12"), ("cy", "10"), ("r", "4")]);
        assert_eq!(tuple(&element_bounds(&c)), (8.0, 6.0, 16.0, 14.0));

        let e = el("ellipse", &[("cx", "0"), ("cy", "0"), ("rx", "5"), ("ry", "2")]);
        assert_eq!(tuple(&element_bounds(&e)), (-5.0, -2.0, 5.0, 2.0));

        let r = el(
            "rect",
            &[("x", "2"), ("y", "3"), ("width", "10px"), ("height", "4"), ("rx", "9")],
        );
        assert_eq!(tuple(&element_bounds(&r)), (2.0, 3.0, 12.0, 7.0));

        let l = el("line", &[("x1", "10"), ("y1", "0"), ("x2", "0"), ("y2", "5")]);
        assert_eq!(tuple(&element_bounds(&l)), (0.0, 0.0, 10.0, 5.0));

        let p = el("polygon", &[("points", "1,1 9,1 5,8 7")]);
        assert_eq!(tuple(&element_bounds(&p)), (1.0, 1.0, 9.0, 8.0));

        let p = el("polyline", &[("points", "-1-2 3.5,4")]);
        assert_eq!(tuple(&element_bounds(&p)), (-1.0, -2.0, 3.5, 4.0));
    }

    #[test]
    fn overflowing_points_are_skipped() {
        let p = el("polygon", &[("points", "0,0 1e400,5 10,10 4")]);
        // Skipping `1e400` re-pairs the stream as (0,0) (5,10) (10,4).
        assert_eq!(tuple(&element_bounds(&p)), (0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn missing_attributes_default_to_zero() {
        let r = el("rect", &[("width", "5"), ("height", "5")]);
        assert_eq!(tuple(&element_bounds(&r)), (0.0, 0.0, 5.0, 5.0));
        // A bare circle still contributes the origin.
        let c = el("circle", &[]);
        assert_eq!(tuple(&element_bounds(&c)), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn path_without_d_and_unknown_elements_are_empty() {
        assert!(!element_bounds(&el("path", &[])).is_valid());
        assert!(!element_bounds(&el("text", &[("x", "5"), ("y", "5")])).is_valid());
        assert!(!element_bounds(&el("g", &[])).is_valid());
    }

    #[test]
    fn groups_merge_children() {
        let g = SvgElement::new("g")
            .with_child(el("rect", &[("x", "0"), ("y", "0"), ("width", "4"), ("height", "4")]))
            .with_child(
                SvgElement::new("g").with_child(el("circle", &[("cx", "20"), ("cy", "20"), ("r", "2")])),
            );
        assert_eq!(tuple(&element_bounds(&g)), (0.0, 0.0, 22.0, 22.0));
    }

    #[test]
    fn non_rendered_subtrees_are_skipped_at_every_level() {
        let big = el("rect", &[("x", "-100"), ("y", "-100"), ("width", "500"), ("height", "500")]);
        let root = SvgElement::new("svg")
            .with_child(SvgElement::new("defs").with_child(big.clone()))
            .with_child(SvgElement::new("clipPath").with_child(big.clone()))
            .with_child(
                SvgElement::new("g")
                    .with_child(SvgElement::new("mask").with_child(big.clone()))
                    .with_child(SvgElement::new("g").with_child(SvgElement::new("defs").with_child(big)))
                    .with_child(el("path", &[("d", "M2 2 H10 V10")])),
            );
        assert_eq!(tuple(&content_bounds(&root)), (2.0, 2.0, 10.0, 10.0));
    }

    #[test]
    fn root_without_rendered_children_is_empty() {
        let root = SvgElement::new("svg").with_child(
            SvgElement::new("defs").with_child(el("circle", &[("cx", "1"), ("cy", "1"), ("r", "1")])),
        );
        assert!(!content_bounds(&root).is_valid());
    }
}
