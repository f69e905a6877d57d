// File: crates/fuelband-render-skia/src/surface.rs
// Summary: Paints generated band/trend geometry to PNG via Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use fuelband_core::{BandGeometry, CurvePath, PathSeg, Polygon, Polyline, TrendGeometry};

use crate::palette::BandPalette;
use crate::ticks::{cent_ticks, day_ticks};
use crate::types::RenderOptions;

/// Fill alpha for the band body.
const FILL_ALPHA: u8 = 96;
/// Fill alpha for the fade trapezoids at run boundaries.
const FADE_FILL_ALPHA: u8 = 48;
/// Stroke alpha for fade line stubs.
const FADE_STROKE_ALPHA: u8 = 120;
/// Extra x margin so boundary fades stay inside the plot, in day units.
const X_MARGIN: f64 = 0.5;

/// Union of the geometry bounds the scale transform is fitted to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_start: f64,
    pub x_end: f64,
    pub y_height: f64,
}

/// A chart to paint: one geometry per percentile band plus an optional
/// trend overlay. Geometry is consumed read-only; painting applies only an
/// affine fit-to-view scale, colors and alpha.
#[derive(Default)]
pub struct ChartSurface {
    pub bands: Vec<BandGeometry>,
    pub trend: Option<TrendGeometry>,
}

impl ChartSurface {
    pub fn new() -> Self {
        Self { bands: Vec::new(), trend: None }
    }

    pub fn add_band(&mut self, geometry: BandGeometry) {
        self.bands.push(geometry);
    }

    pub fn set_trend(&mut self, geometry: TrendGeometry) {
        self.trend = Some(geometry);
    }

    /// Union bounds across every band and the trend, `None` when nothing
    /// has been added.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut x_start = f64::INFINITY;
        let mut x_end = f64::NEG_INFINITY;
        let mut y_height = f64::NEG_INFINITY;
        for band in &self.bands {
            x_start = x_start.min(band.x_start);
            x_end = x_end.max(band.x_end);
            y_height = y_height.max(band.y_height);
        }
        if let Some(trend) = &self.trend {
            x_start = x_start.min(trend.x_start);
            x_end = x_end.max(trend.x_end);
            y_height = y_height.max(trend.y_height);
        }
        if !x_start.is_finite() || !x_end.is_finite() || !y_height.is_finite() {
            return None;
        }
        Some(Bounds { x_start, x_end, y_height })
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, palette: &BandPalette, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.background);

        let plot_left = opts.insets.left as i32;
        let plot_right = opts.width - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = opts.height - opts.insets.bottom as i32;

        let bounds = self.bounds().unwrap_or(Bounds { x_start: 0.0, x_end: 1.0, y_height: 1.0 });
        let x_min = bounds.x_start - X_MARGIN;
        let x_max = bounds.x_end + X_MARGIN;
        let y_max = (bounds.y_height * 1.02).max(1e-9);

        // Fit-to-view scale closures shared by every primitive.
        let xspan = (x_max - x_min).max(1e-9);
        let l = plot_left as f32;
        let r = plot_right as f32;
        let t = plot_top as f32;
        let b = plot_bottom as f32;
        let sx = move |x: f64| -> f32 { l + ((x - x_min) / xspan) as f32 * (r - l) };
        let sy = move |y: f64| -> f32 { b - (y / y_max) as f32 * (b - t) };

        if opts.draw_frame {
            draw_frame(canvas, l, t, r, b, &bounds, &sx, &sy);
        }

        for (i, band) in self.bands.iter().enumerate() {
            draw_band(canvas, band, palette.color_for(i), &sx, &sy);
        }
        if let Some(trend) = &self.trend {
            draw_trend(canvas, trend, palette.trend, &sx, &sy);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        palette: &BandPalette,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(palette, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn with_alpha(color: skia::Color, alpha: u8) -> skia::Color {
    skia::Color::from_argb(alpha, color.r(), color.g(), color.b())
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn polyline_path(line: &Polyline, sx: &dyn Fn(f64) -> f32, sy: &dyn Fn(f64) -> f32) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some(first) = line.points.first() {
        path.move_to((sx(first.x), sy(first.y)));
        for p in line.points.iter().skip(1) {
            path.line_to((sx(p.x), sy(p.y)));
        }
    }
    path
}

fn polygon_path(area: &Polygon, sx: &dyn Fn(f64) -> f32, sy: &dyn Fn(f64) -> f32) -> skia::Path {
    let mut path = skia::Path::new();
    let pts = area.points();
    if let Some(first) = pts.first() {
        path.move_to((sx(first.x), sy(first.y)));
        // The ring repeats its first point; let close() do the last hop.
        for p in pts.iter().skip(1).take(pts.len().saturating_sub(2)) {
            path.line_to((sx(p.x), sy(p.y)));
        }
        path.close();
    }
    path
}

fn curve_path(curve: &CurvePath, sx: &dyn Fn(f64) -> f32, sy: &dyn Fn(f64) -> f32) -> skia::Path {
    let mut path = skia::Path::new();
    path.move_to((sx(curve.start.x), sy(curve.start.y)));
    for seg in &curve.segs {
        match *seg {
            PathSeg::Line(p) => {
                path.line_to((sx(p.x), sy(p.y)));
            }
            PathSeg::Quad { ctrl, to } => {
                path.quad_to((sx(ctrl.x), sy(ctrl.y)), (sx(to.x), sy(to.y)));
            }
        }
    }
    path
}

fn draw_band(
    canvas: &skia::Canvas,
    band: &BandGeometry,
    color: skia::Color,
    sx: &dyn Fn(f64) -> f32,
    sy: &dyn Fn(f64) -> f32,
) {
    let body_fill = fill_paint(with_alpha(color, FILL_ALPHA));
    let fade_fill = fill_paint(with_alpha(color, FADE_FILL_ALPHA));
    for area in &band.fill_areas {
        canvas.draw_path(&polygon_path(area, sx, sy), &body_fill);
    }
    for area in band.fade_in_areas.iter().chain(&band.fade_out_areas) {
        canvas.draw_path(&polygon_path(area, sx, sy), &fade_fill);
    }

    let stroke = stroke_paint(color, 2.0);
    for line in band.high_lines.iter().chain(&band.low_lines) {
        canvas.draw_path(&polyline_path(line, sx, sy), &stroke);
    }

    let fade_stroke = stroke_paint(with_alpha(color, FADE_STROKE_ALPHA), 2.0);
    for line in band
        .fade_in_high
        .iter()
        .chain(&band.fade_in_low)
        .chain(&band.fade_out_high)
        .chain(&band.fade_out_low)
    {
        canvas.draw_path(&polyline_path(line, sx, sy), &fade_stroke);
    }
}

fn draw_trend(
    canvas: &skia::Canvas,
    trend: &TrendGeometry,
    color: skia::Color,
    sx: &dyn Fn(f64) -> f32,
    sy: &dyn Fn(f64) -> f32,
) {
    let stroke = stroke_paint(color, 2.5);
    for curve in &trend.main_curves {
        canvas.draw_path(&curve_path(curve, sx, sy), &stroke);
    }
    let fade_stroke = stroke_paint(with_alpha(color, FADE_STROKE_ALPHA), 2.5);
    for line in trend.fade_in_lines.iter().chain(&trend.fade_out_lines) {
        canvas.draw_path(&polyline_path(line, sx, sy), &fade_stroke);
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    bounds: &Bounds,
    sx: &dyn Fn(f64) -> f32,
    sy: &dyn Fn(f64) -> f32,
) {
    let axis = stroke_paint(skia::Color::from_argb(255, 180, 180, 190), 1.5);
    canvas.draw_line((l, b), (r, b), &axis);
    canvas.draw_line((l, t), (l, b), &axis);

    let tick = stroke_paint(skia::Color::from_argb(255, 150, 150, 160), 1.0);
    for x in day_ticks(bounds.x_start, bounds.x_end, 12) {
        let px = sx(x);
        canvas.draw_line((px, b), (px, b + 5.0), &tick);
    }
    for y in cent_ticks(bounds.y_height, 8) {
        let py = sy(y);
        canvas.draw_line((l - 5.0, py), (l, py), &tick);
    }
}
