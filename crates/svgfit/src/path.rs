//! SVG path data: tokenizer plus a bounds evaluator.
//!
//! Bounds are approximate on purpose. Bezier segments contribute their control points and end
//! point, arcs only their end point. The padding thresholds in [`crate::assess`] are tuned against
//! this approximation, so it must not be replaced by exact extrema.

use crate::model::BoundingBox;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    /// One of `MmLlHhVvCcSsQqTtAaZz`.
    pub command: char,
    pub params: Vec<f64>,
}

fn re_command() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        Regex::new(r"([MmLlHhVvCcSsQqTtAaZz])([^MmLlHhVvCcSsQqTtAaZz]*)").expect("valid regex")
    })
}

fn re_num() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    // Separators between numbers are optional before a sign or a second decimal point:
    // `1-2` is `1 -2` and `.5.5` is `.5 .5`.
    ONCE.get_or_init(|| {
        Regex::new(r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex")
    })
}

/// Extracts every number from `s`, skipping tokens that don't parse or overflow `f64`.
pub(crate) fn parse_numbers(s: &str) -> Vec<f64> {
    re_num()
        .find_iter(s)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect()
}

/// Splits path data into commands. Text before the first command letter is ignored.
pub fn parse_path(d: &str) -> Vec<PathCommand> {
    re_command()
        .captures_iter(d)
        .filter_map(|caps| {
            let command = caps.get(1)?.as_str().chars().next()?;
            let params = caps
                .get(2)
                .map(|m| parse_numbers(m.as_str()))
                .unwrap_or_default();
            Some(PathCommand { command, params })
        })
        .collect()
}

/// Replays `d` and returns the (approximate) bounding box of everything it visits.
pub fn path_bounds(d: &str) -> BoundingBox {
    let mut b = BoundingBox::new();
    let (mut cur_x, mut cur_y) = (0.0_f64, 0.0_f64);
    let (mut start_x, mut start_y) = (0.0_f64, 0.0_f64);

    for cmd in parse_path(d) {
        let p = cmd.params.as_slice();
        match cmd.command {
            'M' | 'm' => {
                for (i, pair) in p.chunks_exact(2).enumerate() {
                    if cmd.command == 'M' {
                        (cur_x, cur_y) = (pair[0], pair[1]);
                    } else {
                        cur_x += pair[0];
                        cur_y += pair[1];
                    }
                    // Extra pairs after the first are implicit linetos.
                    if i == 0 {
                        (start_x, start_y) = (cur_x, cur_y);
                    }
                    b.expand(cur_x, cur_y);
                }
            }
            'L' | 'T' | 'l' | 't' => {
                let rel = cmd.command.is_ascii_lowercase();
                for pair in p.chunks_exact(2) {
                    if rel {
                        cur_x += pair[0];
                        cur_y += pair[1];
                    } else {
                        (cur_x, cur_y) = (pair[0], pair[1]);
                    }
                    b.expand(cur_x, cur_y);
                }
            }
            'H' => {
                for &x in p {
                    cur_x = x;
                    b.expand(cur_x, cur_y);
                }
            }
            'h' => {
                for &dx in p {
                    cur_x += dx;
                    b.expand(cur_x, cur_y);
                }
            }
            'V' => {
                for &y in p {
                    cur_y = y;
                    b.expand(cur_x, cur_y);
                }
            }
            'v' => {
                for &dy in p {
                    cur_y += dy;
                    b.expand(cur_x, cur_y);
                }
            }
            'C' | 'S' | 'Q' | 'c' | 's' | 'q' => {
                // Control points first, then the end point; all offsets of a relative segment are
                // taken from the point the segment starts at.
                let stride = if matches!(cmd.command, 'C' | 'c') { 6 } else { 4 };
                let rel = cmd.command.is_ascii_lowercase();
                for seg in p.chunks_exact(stride) {
                    let (ox, oy) = if rel { (cur_x, cur_y) } else { (0.0, 0.0) };
                    for pt in seg.chunks_exact(2) {
                        b.expand(ox + pt[0], oy + pt[1]);
                    }
                    cur_x = ox + seg[stride - 2];
                    cur_y = oy + seg[stride - 1];
                }
            }
            'A' | 'a' => {
                // rx ry x-axis-rotation large-arc-flag sweep-flag x y
                for seg in p.chunks_exact(7) {
                    if cmd.command == 'a' {
                        cur_x += seg[5];
                        cur_y += seg[6];
                    } else {
                        (cur_x, cur_y) = (seg[5], seg[6]);
                    }
                    b.expand(cur_x, cur_y);
                }
            }
            'Z' | 'z' => {
                cur_x = start_x;
                cur_y = start_y;
            }
            _ => {}
        }
    }

    b
}
