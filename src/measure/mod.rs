//! File size measurement and bundle aggregation
//!
//! [`SizeMeasurer`] reads a file once per run and records its raw and gzip
//! size in a [`SizeCache`]; [`Aggregator`] folds those sizes into bundle
//! totals with global files subtracted by set membership.

mod aggregate;
mod cache;
mod measurer;

pub use aggregate::Aggregator;
pub use cache::{CacheStats, SizeCache};
pub use measurer::{gzip_size, normalize_key, SizeMeasurer};
