//! Pipeline orchestration.

mod executor;

pub use executor::{EdaPipeline, EdaStage};
