// File: crates/fuelband-core/src/trend.rs
// Summary: Smoothed trend geometry; 7-day windowed average with quad interpolation.

use crate::coords::ChartSpace;
use crate::error::GeometryError;
use crate::path::{CurvePath, PathSeg, Point, Polyline};
use crate::runs::{detect_runs, Run};
use crate::sample::{index_by_day, TrendSample};

/// Horizontal reach of a fade stub when no inter-sample slope exists.
const STUB_REACH: f64 = 1.0 / 3.0;

/// Half-width of the centered averaging window (3 + 1 + 3 samples).
const WINDOW_HALF: i64 = 3;

/// Step used to remap out-of-range window indices back toward the run.
/// Always 7, the window width, regardless of run length.
const WINDOW_STEP: i64 = 7;

/// Centered 7-sample moving average over `values`.
///
/// For each index `i`, window slot `i + k` (`k` in -3..=3) is remapped by
/// adding 7 while below zero, then subtracting 7 while at or past the end.
/// For runs of at least 7 samples this always lands in range and the result
/// at `i` is the mean of the 7 remapped samples. Shorter runs can leave a
/// slot negative after both passes; such slots are dropped and the mean is
/// taken over the samples actually reached.
pub fn windowed_average(values: &[f64]) -> Vec<f64> {
    let n = values.len() as i64;
    (0..values.len())
        .map(|i| {
            let mut sum = 0.0;
            let mut taken = 0u32;
            for k in -WINDOW_HALF..=WINDOW_HALF {
                let mut j = i as i64 + k;
                while j < 0 {
                    j += WINDOW_STEP;
                }
                while j >= n {
                    j -= WINDOW_STEP;
                }
                if j >= 0 {
                    sum += values[j as usize];
                    taken += 1;
                }
            }
            // `k == 0` never remaps, so at least one sample is always taken.
            sum / f64::from(taken)
        })
        .collect()
}

/// Finished geometry for the smoothed trend overlay.
///
/// Same run partitioning and fade policy as the band generator, but with a
/// single value per day and a curve-interpolated main line through the
/// 7-day averaged points.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendGeometry {
    pub fade_in_lines: Vec<Polyline>,
    pub main_curves: Vec<CurvePath>,
    pub fade_out_lines: Vec<Polyline>,
    /// Leftmost run-start x across all runs produced.
    pub x_start: f64,
    /// Rightmost run-end x across all runs produced.
    pub x_end: f64,
    /// Largest observed y across all runs produced (pre-smoothing).
    pub y_height: f64,
}

impl TrendGeometry {
    /// Build the trend geometry for a raw sample sequence.
    ///
    /// Same input contract as [`crate::BandGeometry::new`]: order-free,
    /// [`GeometryError::NoData`] on empty input, and
    /// [`GeometryError::ConflictingDay`] on a repeated day with differing
    /// values.
    pub fn new(
        space: &ChartSpace,
        samples: impl IntoIterator<Item = TrendSample>,
    ) -> Result<Self, GeometryError> {
        let by_day = index_by_day(samples.into_iter().map(|s| (s.day, s.value)))?;
        let mut geo = Self {
            fade_in_lines: Vec::new(),
            main_curves: Vec::new(),
            fade_out_lines: Vec::new(),
            x_start: f64::INFINITY,
            x_end: f64::NEG_INFINITY,
            y_height: f64::NEG_INFINITY,
        };
        for run in detect_runs(&by_day) {
            geo.push_run(space, &run);
        }
        Ok(geo)
    }

    fn push_run(&mut self, space: &ChartSpace, run: &Run<i16>) {
        let n = run.len();
        let x0 = space.x_value(run.start);
        let raw: Vec<Point> = run
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(x0 + i as f64, space.y_value(v)))
            .collect();

        if n == 1 {
            // No slope available; constant-height stubs either side.
            let p = raw[0];
            self.fade_in_lines
                .push(Polyline::segment(Point::new(p.x - STUB_REACH, p.y), p));
            self.fade_out_lines
                .push(Polyline::segment(p, Point::new(p.x + STUB_REACH, p.y)));
        } else {
            let ys: Vec<f64> = raw.iter().map(|p| p.y).collect();
            let avg = windowed_average(&ys);
            let smooth: Vec<Point> = raw
                .iter()
                .zip(&avg)
                .map(|(p, &y)| Point::new(p.x, y))
                .collect();

            // Fades follow the pre-smoothing boundary slope, anchored at the
            // smoothed boundary point.
            let head = smooth[0];
            let dx_in = (raw[1].x - raw[0].x) / 3.0;
            let dy_in = (raw[1].y - raw[0].y) / 3.0;
            self.fade_in_lines.push(Polyline::segment(
                Point::new(head.x - dx_in, head.y - dy_in),
                head,
            ));

            let tail = smooth[n - 1];
            let dx_out = (raw[n - 1].x - raw[n - 2].x) / 3.0;
            let dy_out = (raw[n - 1].y - raw[n - 2].y) / 3.0;
            self.fade_out_lines.push(Polyline::segment(
                tail,
                Point::new(tail.x + dx_out, tail.y + dy_out),
            ));

            // Quadratic segments: control at the pair's first point, ending
            // at the pair midpoint; a final straight segment lands exactly
            // on the last sample so the curve cannot overshoot the boundary.
            let mut segs = Vec::with_capacity(n);
            for pair in smooth.windows(2) {
                segs.push(PathSeg::Quad {
                    ctrl: pair[0],
                    to: pair[0].midpoint(pair[1]),
                });
            }
            segs.push(PathSeg::Line(smooth[n - 1]));
            self.main_curves.push(CurvePath { start: smooth[0], segs });
        }

        self.x_start = self.x_start.min(x0);
        self.x_end = self.x_end.max(x0 + (n - 1) as f64);
        for p in &raw {
            self.y_height = self.y_height.max(p.y);
        }
    }
}
