//! Comparison of two snapshots at file, page and route granularity

mod engine;
mod model;

pub use engine::DiffEngine;
pub use model::{DiffResult, GlobalChange, RouteChange, SizeChange};
