pub mod engine;
pub mod pipeline;
pub mod text;

pub use crate::domain::model::{Stage, StageOutput, TransformResult};
pub use crate::domain::ports::{Pipeline, TextStage};
pub use crate::utils::error::Result;
