// File: crates/fuelband-render-skia/src/ticks.rs
// Summary: Candidate axis-tick coordinates from geometry bounds.

/// Whole-day x tick coordinates across `[x_start, x_end]`, thinned to at
/// most `max_ticks` by a whole-day stride.
pub fn day_ticks(x_start: f64, x_end: f64, max_ticks: usize) -> Vec<f64> {
    if max_ticks == 0 || x_end < x_start {
        return Vec::new();
    }
    let first = x_start.ceil() as i64;
    let last = x_end.floor() as i64;
    if last < first {
        return Vec::new();
    }
    let count = (last - first + 1) as usize;
    let stride = count.div_ceil(max_ticks).max(1) as i64;
    (first..=last)
        .step_by(stride as usize)
        .map(|d| d as f64)
        .collect()
}

/// Round-cent y tick coordinates from zero up to `y_height`, at most
/// `max_ticks` of them. The step is the smallest of 1/2/5 x 10^k cents
/// that fits.
pub fn cent_ticks(y_height: f64, max_ticks: usize) -> Vec<f64> {
    if max_ticks == 0 || y_height <= 0.0 {
        return Vec::new();
    }
    let mut step = 1.0f64;
    loop {
        for mult in [1.0, 2.0, 5.0] {
            let s = step * mult;
            if (y_height / s) as usize + 1 <= max_ticks {
                let mut out = Vec::new();
                let mut y = 0.0;
                while y <= y_height {
                    out.push(y);
                    y += s;
                }
                return out;
            }
        }
        step *= 10.0;
    }
}
