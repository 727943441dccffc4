use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Trim,
    Collapse,
    Reverse,
}

impl Stage {
    /// Canonical execution order.
    pub const ALL: [Stage; 3] = [Stage::Trim, Stage::Collapse, Stage::Reverse];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Trim => "trim",
            Stage::Collapse => "collapse",
            Stage::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageOutput {
    pub stage: Stage,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    pub input: String,
    pub stages: Vec<StageOutput>,
    pub output: String,
}

impl TransformResult {
    pub fn stage_value(&self, stage: Stage) -> Option<&str> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.value.as_str())
    }
}
