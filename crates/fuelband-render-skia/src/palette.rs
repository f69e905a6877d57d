// File: crates/fuelband-render-skia/src/palette.rs
// Summary: Explicit per-band color assignment and trend styling.

use skia_safe as skia;

/// Color assignment for the percentile bands and the trend overlay.
///
/// Passed explicitly to the renderer instead of living in static lookup
/// state; band `i` takes `colors[i % colors.len()]`.
#[derive(Clone, Debug)]
pub struct BandPalette {
    colors: Vec<skia::Color>,
    pub trend: skia::Color,
}

impl BandPalette {
    pub fn new(colors: Vec<skia::Color>, trend: skia::Color) -> Self {
        let colors = if colors.is_empty() {
            vec![skia::Color::from_argb(255, 150, 150, 160)]
        } else {
            colors
        };
        Self { colors, trend }
    }

    pub fn color_for(&self, band: usize) -> skia::Color {
        self.colors[band % self.colors.len()]
    }

    pub fn band_count(&self) -> usize {
        self.colors.len()
    }

    /// Ten-band cool-to-warm ramp for dark backgrounds.
    pub fn dark() -> Self {
        Self::new(
            vec![
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 72, 186, 235),
                skia::Color::from_argb(255, 64, 200, 190),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 140, 210, 80),
                skia::Color::from_argb(255, 220, 210, 70),
                skia::Color::from_argb(255, 240, 180, 60),
                skia::Color::from_argb(255, 240, 140, 70),
                skia::Color::from_argb(255, 230, 100, 80),
                skia::Color::from_argb(255, 220, 80, 80),
            ],
            skia::Color::from_argb(255, 255, 230, 70),
        )
    }

    /// Ten-band ramp tuned for light backgrounds.
    pub fn light() -> Self {
        Self::new(
            vec![
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 36, 140, 185),
                skia::Color::from_argb(255, 30, 155, 150),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 110, 165, 50),
                skia::Color::from_argb(255, 180, 160, 30),
                skia::Color::from_argb(255, 200, 135, 25),
                skia::Color::from_argb(255, 205, 105, 40),
                skia::Color::from_argb(255, 200, 75, 55),
                skia::Color::from_argb(255, 200, 60, 60),
            ],
            skia::Color::from_argb(255, 30, 120, 240),
        )
    }
}

impl Default for BandPalette {
    fn default() -> Self {
        Self::dark()
    }
}
