//! Data preparation for astrodynamic visualization: body-to-body separation
//! series sampled from an injected ephemeris provider, and porkchop
//! transfer-cost grids reduced to a clipped range, contour levels, and a
//! minimum-cost point. Rendering itself is left to the caller.

pub mod catalog;
pub mod constants;
pub mod ephemeris;
pub mod helioplot_errors;
pub mod porkchop;
pub mod separation;
pub mod time;

pub use catalog::{BodyCatalog, BodyRecord};
pub use ephemeris::PositionProvider;
pub use helioplot_errors::HelioplotError;
pub use porkchop::{reduce, ClipRange, CostGrid, GridRow, MinimumPoint, Reduction};
pub use separation::{sample_separation, SampleSeries, SeriesExtrema, SeriesPoint};
