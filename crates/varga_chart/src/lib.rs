//! Varga chart assembly over a D1 snapshot.
//!
//! Provides the bridge between caller-supplied tropical positions and the
//! pure rule engine in `varga_base`: resolves each body to sidereal,
//! derives its divisional sign, and houses it from the divisional lagna.

pub mod chart;
pub mod chart_types;
pub mod config;
pub mod engine;
pub mod error;
pub mod store;

pub use chart::{build_chart, build_charts, build_charts_for};
pub use chart_types::{BaseChart, BodyInput, VargaChart, VargaPlacement, is_vargottama};
pub use config::{CalibrationSource, ChartConfig};
pub use engine::VargaEngine;
pub use error::ChartError;
pub use store::CalibrationStore;
