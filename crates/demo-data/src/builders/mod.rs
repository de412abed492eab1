//! Fluent builder APIs for demo datasets.
//!
//! The [`DatasetBuilder`] provides a convenient way to construct a complete,
//! referentially consistent workflow dataset in one call.

mod dataset;

pub use dataset::{DatasetBuilder, GeneratedDataset};
