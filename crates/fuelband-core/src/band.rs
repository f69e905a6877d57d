// File: crates/fuelband-core/src/band.rs
// Summary: Percentile-band geometry; per-run envelope lines, fills and fade ramps.

use crate::coords::ChartSpace;
use crate::error::GeometryError;
use crate::path::{Point, Polygon, Polyline};
use crate::runs::{detect_runs, Run};
use crate::sample::{index_by_day, BandSample};

/// Horizontal reach of a fade stub when no inter-sample slope exists.
const STUB_REACH: f64 = 1.0 / 3.0;

/// Finished geometry for one percentile band.
///
/// Computed eagerly at construction and never mutated; the rendering layer
/// only applies an affine scale and paints. High- and low-boundary
/// primitives live in separate collections so they can be stroked (and
/// styled) independently, including the length-1 fade stubs.
#[derive(Clone, Debug, PartialEq)]
pub struct BandGeometry {
    pub fade_in_high: Vec<Polyline>,
    pub fade_in_low: Vec<Polyline>,
    pub high_lines: Vec<Polyline>,
    pub low_lines: Vec<Polyline>,
    pub fade_out_high: Vec<Polyline>,
    pub fade_out_low: Vec<Polyline>,
    pub fade_in_areas: Vec<Polygon>,
    pub fill_areas: Vec<Polygon>,
    pub fade_out_areas: Vec<Polygon>,
    /// Leftmost run-start x across all runs produced.
    pub x_start: f64,
    /// Rightmost run-end x across all runs produced.
    pub x_end: f64,
    /// Largest high-boundary y across all runs produced.
    pub y_height: f64,
}

impl BandGeometry {
    /// Build the full band geometry for a raw sample sequence.
    ///
    /// Records may arrive in any order; output depends only on the
    /// day-keyed content. Fails with [`GeometryError::NoData`] on an empty
    /// sequence and [`GeometryError::ConflictingDay`] when a day repeats
    /// with differing values.
    pub fn new(
        space: &ChartSpace,
        samples: impl IntoIterator<Item = BandSample>,
    ) -> Result<Self, GeometryError> {
        let by_day = index_by_day(samples.into_iter().map(|s| (s.day, (s.high, s.low))))?;
        let mut geo = Self {
            fade_in_high: Vec::new(),
            fade_in_low: Vec::new(),
            high_lines: Vec::new(),
            low_lines: Vec::new(),
            fade_out_high: Vec::new(),
            fade_out_low: Vec::new(),
            fade_in_areas: Vec::new(),
            fill_areas: Vec::new(),
            fade_out_areas: Vec::new(),
            x_start: f64::INFINITY,
            x_end: f64::NEG_INFINITY,
            y_height: f64::NEG_INFINITY,
        };
        for run in detect_runs(&by_day) {
            geo.push_run(space, &run);
        }
        Ok(geo)
    }

    fn push_run(&mut self, space: &ChartSpace, run: &Run<(i16, i16)>) {
        let n = run.len();
        let x0 = space.x_value(run.start);
        // Days inside a run are consecutive, so x advances by one unit.
        let hi: Vec<Point> = run
            .values
            .iter()
            .enumerate()
            .map(|(i, &(high, _))| Point::new(x0 + i as f64, space.y_value(high)))
            .collect();
        let lo: Vec<Point> = run
            .values
            .iter()
            .enumerate()
            .map(|(i, &(_, low))| Point::new(x0 + i as f64, space.y_value(low)))
            .collect();

        if n == 1 {
            self.push_stub_run(hi[0], lo[0]);
        } else {
            // One-third of the adjacent inter-sample gap, at constant height.
            let lead = (hi[1].x - hi[0].x) / 3.0;
            let tail = (hi[n - 1].x - hi[n - 2].x) / 3.0;
            let hi_in = Point::new(hi[0].x - lead, hi[0].y);
            let lo_in = Point::new(lo[0].x - lead, lo[0].y);
            let hi_out = Point::new(hi[n - 1].x + tail, hi[n - 1].y);
            let lo_out = Point::new(lo[n - 1].x + tail, lo[n - 1].y);

            self.fade_in_high.push(Polyline::segment(hi_in, hi[0]));
            self.fade_in_low.push(Polyline::segment(lo_in, lo[0]));
            self.fade_out_high.push(Polyline::segment(hi[n - 1], hi_out));
            self.fade_out_low.push(Polyline::segment(lo[n - 1], lo_out));

            self.fade_in_areas
                .push(Polygon::closed(vec![hi_in, hi[0], lo[0], lo_in]));
            self.fade_out_areas
                .push(Polygon::closed(vec![hi[n - 1], hi_out, lo_out, lo[n - 1]]));

            // High boundary forward, low boundary reversed, closed.
            let mut ring = hi.clone();
            ring.extend(lo.iter().rev().copied());
            self.fill_areas.push(Polygon::closed(ring));

            self.high_lines.push(Polyline::new(hi.clone()));
            self.low_lines.push(Polyline::new(lo));
        }

        self.x_start = self.x_start.min(x0);
        self.x_end = self.x_end.max(x0 + (n - 1) as f64);
        for p in &hi {
            self.y_height = self.y_height.max(p.y);
        }
    }

    /// A run of a single day: fade stubs and trapezoids only. A polyline or
    /// fill needs two samples, so no main line or fill area is produced.
    fn push_stub_run(&mut self, hi: Point, lo: Point) {
        let hi_in = Point::new(hi.x - STUB_REACH, hi.y);
        let lo_in = Point::new(lo.x - STUB_REACH, lo.y);
        let hi_out = Point::new(hi.x + STUB_REACH, hi.y);
        let lo_out = Point::new(lo.x + STUB_REACH, lo.y);

        self.fade_in_high.push(Polyline::segment(hi_in, hi));
        self.fade_in_low.push(Polyline::segment(lo_in, lo));
        self.fade_out_high.push(Polyline::segment(hi, hi_out));
        self.fade_out_low.push(Polyline::segment(lo, lo_out));

        self.fade_in_areas
            .push(Polygon::closed(vec![hi_in, hi, lo, lo_in]));
        self.fade_out_areas
            .push(Polygon::closed(vec![hi, hi_out, lo_out, lo]));
    }
}
