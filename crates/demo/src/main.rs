// File: crates/demo/src/main.rs
// Summary: Demo loads a fuel-price CSV (or generates sample data), builds per-band
//          and trend geometry, and renders a PNG.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fuelband_core::{BandGeometry, BandSample, CalendarDay, ChartSpace, TrendGeometry, TrendSample};
use fuelband_render_skia::{BandPalette, ChartSurface, RenderOptions};

/// One CSV row: a percentile band's envelope for one day, tenths of a cent.
#[derive(Clone, Copy, Debug)]
struct BandRow {
    day: CalendarDay,
    band: u16,
    high: i16,
    low: i16,
}

fn main() -> Result<()> {
    // Accept path from CLI or fall back to the sample filename.
    let raw = std::env::args().nth(1).unwrap_or_else(|| "fuel_prices.csv".to_string());
    let path = Path::new(&raw);

    let rows = if path.exists() {
        let rows = load_rows_csv(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        println!("Loaded {} rows from {}", rows.len(), path.display());
        rows
    } else {
        println!("No input file '{}'; using generated sample data", path.display());
        sample_rows()
    };
    anyhow::ensure!(!rows.is_empty(), "no usable rows; check headers/delimiter.");

    let space = ChartSpace::default();
    let mut surface = ChartSurface::new();

    // One geometry per band, ordered by band index.
    let mut per_band: BTreeMap<u16, Vec<BandSample>> = BTreeMap::new();
    for row in &rows {
        per_band
            .entry(row.band)
            .or_default()
            .push(BandSample { day: row.day, high: row.high, low: row.low });
    }
    println!("Building geometry for {} bands", per_band.len());
    for (band, samples) in per_band {
        let geo = BandGeometry::new(&space, samples)
            .with_context(|| format!("band {band} geometry"))?;
        println!(
            "  band {band}: {} run(s), {} fill area(s)",
            geo.fade_in_high.len(),
            geo.fill_areas.len()
        );
        surface.add_band(geo);
    }

    // Trend: 7-day smoothed average of the daily midpoint across all bands.
    let mut midpoints: BTreeMap<CalendarDay, (i64, i64)> = BTreeMap::new();
    for row in &rows {
        let entry = midpoints.entry(row.day).or_insert((0, 0));
        entry.0 += i64::from(row.high) + i64::from(row.low);
        entry.1 += 2;
    }
    let trend_samples = midpoints
        .into_iter()
        .map(|(day, (sum, count))| TrendSample::new(day, (sum / count) as i16));
    let trend = TrendGeometry::new(&space, trend_samples).context("trend geometry")?;
    println!("Trend: {} curve(s)", trend.main_curves.len());
    surface.set_trend(trend);

    let bounds = surface.bounds().expect("bounds exist after adding geometry");
    println!(
        "Bounds: x {:.0}..{:.0} ({} days), height {:.1} cents",
        bounds.x_start,
        bounds.x_end,
        (bounds.x_end - bounds.x_start) as i64 + 1,
        bounds.y_height
    );

    let out = out_name(path);
    surface.render_to_png(&BandPalette::dark(), &RenderOptions::default(), &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/fuelband_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("fuelband_{stem}.png"));
    out
}

/// Load `date,band,high,low` rows; header names are matched loosely.
fn load_rows_csv(path: &Path) -> Result<Vec<BandRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_date = idx(&["date", "day", "datetime"]).context("missing date column")?;
    let i_band = idx(&["band", "percentile", "group"]).context("missing band column")?;
    let i_high = idx(&["high", "h", "max"]).context("missing high column")?;
    let i_low = idx(&["low", "l", "min"]).context("missing low column")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).map(str::trim).unwrap_or("");
        let Ok(date) = NaiveDate::parse_from_str(field(i_date), "%Y-%m-%d") else {
            continue;
        };
        let (Ok(band), Ok(high), Ok(low)) = (
            field(i_band).parse::<u16>(),
            field(i_high).parse::<i16>(),
            field(i_low).parse::<i16>(),
        ) else {
            continue;
        };
        out.push(BandRow { day: CalendarDay::new(date), band, high, low });
    }
    Ok(out)
}

/// Ninety days of ten-band sample data with weekly reporting gaps.
fn sample_rows() -> Vec<BandRow> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let mut rows = Vec::new();
    for i in 0..90i64 {
        if i % 7 == 6 {
            continue; // no report that day
        }
        let day = CalendarDay::new(start + chrono::Duration::days(i));
        let mid = 1550.0 + (i as f64 * 0.2).sin() * 120.0 + i as f64 * 0.8;
        for band in 0..10u16 {
            let offset = (f64::from(band) - 4.5) * 35.0;
            rows.push(BandRow {
                day,
                band,
                high: (mid + offset + 14.0) as i16,
                low: (mid + offset - 14.0) as i16,
            });
        }
    }
    rows
}
