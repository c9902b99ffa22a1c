//! Stroke conditioning: smoothing raw pointer samples, then simplifying them.
//!
//! Both stages take a `&Path` and return a new one; the input is never touched.

use crate::defaults;
use crate::path::Path;
use crate::types::{Point, ZoomLevel};

/// Forward exponential low-pass over the interior points.
///
/// Each interior point is blended with the previous *smoothed* point, so the
/// lag cascades along the stroke. First and last points pass through. Paths
/// of four points or fewer, and paths with smoothing off, come back unchanged.
pub fn smooth(path: &Path) -> Path {
    let n = path.points.len();
    if n <= 4 || path.style.smooth_factor.is_off() {
        return path.clone();
    }
    let f = path.style.smooth_factor.raw();

    let mut smoothed: Vec<Point> = Vec::with_capacity(n);
    smoothed.push(path.points[0]);
    for &point in &path.points[1..n - 1] {
        let previous = smoothed[smoothed.len() - 1];
        smoothed.push(point * (1.0 - f) + previous * f);
    }
    smoothed.push(path.points[n - 1]);

    path.with_points(smoothed)
}

/// World-space tolerance for a screen-space pixel tolerance at `zoom`.
pub fn simplify_tolerance(zoom: ZoomLevel) -> f64 {
    zoom.screen_to_world(defaults::SIMPLIFY_TOLERANCE_PX)
}

/// Polyline decimation.
///
/// Fast mode runs a radial-distance pass before Douglas–Peucker; high quality
/// runs Douglas–Peucker alone. Paths with two points or fewer are returned
/// as they are.
pub fn simplify(path: &Path, tolerance: f64, high_quality: bool) -> Path {
    if path.points.len() <= 2 {
        return path.clone();
    }
    let sq_tolerance = tolerance * tolerance;
    let points = if high_quality {
        douglas_peucker(&path.points, sq_tolerance)
    } else {
        douglas_peucker(&radial_distance(&path.points, sq_tolerance), sq_tolerance)
    };
    path.with_points(points)
}

/// Drop points closer than the tolerance to the last kept one. Always keeps
/// both endpoints.
fn radial_distance(points: &[Point], sq_tolerance: f64) -> Vec<Point> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut kept = vec![first];
    let mut previous = first;
    for &point in rest {
        if point.distance_squared(previous) > sq_tolerance {
            kept.push(point);
            previous = point;
        }
    }
    if let Some(&last) = rest.last() {
        if previous != last {
            kept.push(last);
        }
    }
    kept
}

fn douglas_peucker(points: &[Point], sq_tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let last = points.len() - 1;
    let mut kept = vec![points[0]];
    douglas_peucker_step(points, 0, last, sq_tolerance, &mut kept);
    kept.push(points[last]);
    kept
}

/// Push the interior points of `points[first..=last]` worth keeping, in order.
fn douglas_peucker_step(
    points: &[Point],
    first: usize,
    last: usize,
    sq_tolerance: f64,
    kept: &mut Vec<Point>,
) {
    let mut max_sq_dist = sq_tolerance;
    let mut index = None;

    for i in first + 1..last {
        let sq_dist = sq_segment_distance(points[i], points[first], points[last]);
        if sq_dist > max_sq_dist {
            index = Some(i);
            max_sq_dist = sq_dist;
        }
    }

    if let Some(index) = index {
        if index - first > 1 {
            douglas_peucker_step(points, first, index, sq_tolerance, kept);
        }
        kept.push(points[index]);
        if last - index > 1 {
            douglas_peucker_step(points, index, last, sq_tolerance, kept);
        }
    }
}

/// Squared distance from `p` to the segment `a → b`.
fn sq_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance_squared(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance_squared(a + ab * t)
}

/// Runs both stages with one set of options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditioner {
    /// Douglas–Peucker tolerance in world units
    pub tolerance: f64,
    pub high_quality: bool,
    /// Whether the stroke still being drawn is simplified too
    pub simplify_in_progress: bool,
}

impl Conditioner {
    pub fn new(zoom: ZoomLevel) -> Self {
        Self {
            tolerance: simplify_tolerance(zoom),
            high_quality: false,
            simplify_in_progress: false,
        }
    }

    /// Smooth, then simplify, one finished path.
    pub fn condition(&self, path: &Path) -> Path {
        simplify(&smooth(path), self.tolerance, self.high_quality)
    }

    /// Condition a whole path list. When `in_progress` is set the last path
    /// is the live stroke; it is always smoothed but only simplified when
    /// `simplify_in_progress` is on.
    pub fn condition_all(&self, paths: &[Path], in_progress: bool) -> Vec<Path> {
        let live = if in_progress { paths.len().checked_sub(1) } else { None };
        paths
            .iter()
            .enumerate()
            .map(|(i, path)| {
                if Some(i) == live && !self.simplify_in_progress {
                    smooth(path)
                } else {
                    self.condition(path)
                }
            })
            .collect()
    }
}

impl Default for Conditioner {
    fn default() -> Self {
        Self::new(ZoomLevel::ONE)
    }
}
