use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct TransformEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TransformEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::debug!("Extracting input...");
        let input = self.pipeline.extract()?;

        tracing::debug!("Transforming {} chars...", input.chars().count());
        let result = self.pipeline.transform(input)?;

        tracing::debug!("Rendering output...");
        let rendered = self.pipeline.load(&result)?;

        tracing::info!("Transform finished after {} stages", result.stages.len());
        Ok(rendered)
    }
}
