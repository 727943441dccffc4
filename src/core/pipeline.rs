use crate::config::OutputFormat;
use crate::core::text::stage_for;
use crate::domain::model::{Stage, StageOutput, TransformResult};
use crate::domain::ports::{Pipeline, TextStage};
use crate::utils::error::Result;

pub const DEFAULT_INPUT: &str = "The sky is    blue  ";

/// Trim, collapse, then reverse one input string.
pub struct TextPipeline {
    input: String,
    format: OutputFormat,
    stages: Vec<Box<dyn TextStage>>,
}

impl TextPipeline {
    pub fn new(input: impl Into<String>, format: OutputFormat) -> Result<Self> {
        let stages = Stage::ALL
            .into_iter()
            .map(stage_for)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            input: input.into(),
            format,
            stages,
        })
    }

    pub fn with_default_input() -> Result<Self> {
        Self::new(DEFAULT_INPUT, OutputFormat::Plain)
    }
}

impl Pipeline for TextPipeline {
    fn extract(&self) -> Result<String> {
        tracing::debug!("Input: {:?}", self.input);
        Ok(self.input.clone())
    }

    fn transform(&self, input: String) -> Result<TransformResult> {
        let mut current = input.clone();
        let mut stages = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            current = stage.apply(&current);
            tracing::debug!("After {}: {:?}", stage.stage(), current);
            stages.push(StageOutput {
                stage: stage.stage(),
                value: current.clone(),
            });
        }

        Ok(TransformResult {
            input,
            stages,
            output: current,
        })
    }

    fn load(&self, result: &TransformResult) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(result.output.clone()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        }
    }
}
