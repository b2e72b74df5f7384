pub mod binder;
pub mod config;
pub mod delta;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod quantize;
pub mod wrap;

pub use binder::ValueBinder;
pub use config::{AppConfig, KeymapConfig, SliderConfig, UiConfig};
pub use delta::DeltaEmitter;
pub use engine::{ScrollResponse, SliderEngine};
pub use error::{Error, Result};
pub use geometry::StripGeometry;
pub use wrap::{WrapController, WrapOutcome};
