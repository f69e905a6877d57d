// File: crates/fuelband-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot for a multi-band chart with gaps and a trend overlay.

use chrono::NaiveDate;
use fuelband_core::{BandGeometry, BandSample, CalendarDay, ChartSpace, TrendGeometry, TrendSample};
use fuelband_render_skia::{BandPalette, ChartSurface, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    let update = bless_mode();
    if update {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn day(d: u32) -> CalendarDay {
    CalendarDay::new(NaiveDate::from_ymd_opt(2024, 6, d).unwrap())
}

#[test]
fn golden_band_chart() {
    let space = ChartSpace::default();
    let mut surface = ChartSurface::new();

    // Three stacked bands over two runs (gap on day 4, isolated day 8).
    for b in 0..3i16 {
        let spread = 20 * b;
        let samples: Vec<BandSample> = [1u32, 2, 3, 5, 6, 8]
            .iter()
            .map(|&d| BandSample {
                day: day(d),
                high: 120 + spread + (d as i16 % 3) * 4,
                low: 100 + spread + (d as i16 % 3) * 4,
            })
            .collect();
        surface.add_band(BandGeometry::new(&space, samples).expect("band"));
    }

    let trend_samples: Vec<TrendSample> =
        [1u32, 2, 3, 5, 6, 8].iter().map(|&d| TrendSample::new(day(d), 130 + (d as i16 % 4) * 3)).collect();
    surface.set_trend(TrendGeometry::new(&space, trend_samples).expect("trend"));

    let bytes = surface
        .render_to_png_bytes(&BandPalette::dark(), &RenderOptions::default())
        .expect("render bytes");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/band_chart.png");
    write_or_compare(&path, &bytes);
}
