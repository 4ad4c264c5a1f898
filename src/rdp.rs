//! Ramer–Douglas–Peucker polyline simplification.
//!
//! The recursion is unrolled onto an explicit worklist of index ranges,
//! so a long near-straight input cannot exhaust the call stack.

use kurbo::Point;

use crate::error::DetectError;
use crate::vector::{distance_to_line, Vector};

/// Index of the interior point furthest from the chord `a`–`b`, if that
/// distance exceeds `epsilon`. The first of several equally far points wins.
fn find_furthest(
    nodes: &[Vector],
    a: usize,
    b: usize,
    epsilon: f64,
) -> Result<Option<usize>, DetectError> {
    let (start, end) = (nodes[a], nodes[b]);
    let mut record = -1.0;
    let mut furthest = None;
    for (i, &node) in nodes.iter().enumerate().take(b).skip(a + 1) {
        let d = distance_to_line(node, start, end)?;
        if d > record {
            record = d;
            furthest = Some(i);
        }
    }
    Ok(furthest.filter(|_| record > epsilon))
}

/// Simplify `points`, keeping the first and last point and every point
/// that deviates from its local chord by more than `epsilon`.
///
/// Output keeps input order. Fewer than two points are returned as-is.
/// Fails if a chord has coincident endpoints.
pub fn simplify(points: &[Point], epsilon: f64) -> Result<Vec<Point>, DetectError> {
    if epsilon.is_nan() || epsilon < 0.0 {
        return Err(DetectError::InvalidEpsilon(epsilon));
    }
    let n = points.len();
    if n < 2 {
        return Ok(points.to_vec());
    }

    let nodes: Vec<Vector> = points.iter().map(|&p| Vector::from(p)).collect();
    let mut kept = vec![false; n];
    kept[0] = true;
    kept[n - 1] = true;

    let mut worklist = vec![(0, n - 1)];
    while let Some((a, b)) = worklist.pop() {
        if b <= a + 1 {
            continue;
        }
        if let Some(m) = find_furthest(&nodes, a, b, epsilon)? {
            kept[m] = true;
            worklist.push((m, b));
            worklist.push((a, m));
        }
    }

    Ok(points
        .iter()
        .zip(&kept)
        .filter(|&(_, &k)| k)
        .map(|(&p, _)| p)
        .collect())
}
