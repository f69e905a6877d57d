// File: crates/fuelband-core/src/lib.rs
// Summary: Core library entry point; exports band/trend geometry synthesis API.

pub mod band;
pub mod coords;
pub mod error;
pub mod path;
pub mod runs;
pub mod sample;
pub mod trend;

pub use band::BandGeometry;
pub use coords::ChartSpace;
pub use error::GeometryError;
pub use path::{CurvePath, PathSeg, Point, Polygon, Polyline};
pub use runs::{detect_runs, Run};
pub use sample::{BandSample, CalendarDay, TrendSample};
pub use trend::{windowed_average, TrendGeometry};
