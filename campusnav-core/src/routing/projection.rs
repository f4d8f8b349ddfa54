use geo::{Coord, Line};

use crate::model::{distance, is_finite};

/// Closest point on the walkway segments to some off-network point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub point: Coord<f64>,
    /// Index of the winning segment in the network's segment list
    pub segment_index: usize,
    /// Distance from the input point to `point`
    pub distance: f64,
}

impl Projection {
    /// Projection used when nothing better can be computed: the input point
    /// itself on segment 0.
    fn fallback(point: Coord<f64>) -> Self {
        Self {
            point,
            segment_index: 0,
            distance: 0.0,
        }
    }
}

/// Orthogonal projection of `point` onto the closed segment
fn project_onto_segment(point: Coord<f64>, segment: &Line<f64>) -> Coord<f64> {
    let delta = segment.delta();
    let length_sq = delta.x * delta.x + delta.y * delta.y;
    if length_sq == 0.0 {
        return segment.start;
    }

    let offset = point - segment.start;
    let t = ((offset.x * delta.x + offset.y * delta.y) / length_sq).clamp(0.0, 1.0);
    segment.start + delta * t
}

/// Projects `point` onto the nearest of `segments`.
///
/// Ties keep the first segment encountered. A non-finite result, or an empty
/// segment list, yields the input point itself on segment 0.
pub fn project_onto_segments(segments: &[Line<f64>], point: Coord<f64>) -> Projection {
    let best = segments
        .iter()
        .enumerate()
        .map(|(segment_index, segment)| {
            let projected = project_onto_segment(point, segment);
            Projection {
                point: projected,
                segment_index,
                distance: distance(point, projected),
            }
        })
        .reduce(|best, candidate| {
            if candidate.distance < best.distance {
                candidate
            } else {
                best
            }
        });

    match best {
        Some(projection) if is_finite(projection.point) && projection.distance.is_finite() => {
            projection
        }
        _ => {
            log::debug!("No usable projection for {point:?}, keeping the point itself");
            Projection::fallback(point)
        }
    }
}
