// File: crates/fuelband-render-skia/src/lib.rs
// Summary: Renderer entry point; exports surface, palette and tick helpers.

pub mod palette;
pub mod surface;
pub mod ticks;
pub mod types;

pub use palette::BandPalette;
pub use surface::{Bounds, ChartSurface};
pub use ticks::{cent_ticks, day_ticks};
pub use types::{Insets, RenderOptions};
