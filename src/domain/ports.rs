use crate::domain::model::{Stage, TransformResult};
use crate::utils::error::Result;
use std::io::{self, Write};

/// Something that can be played. Each implementor owns a fixed line of output.
pub trait Playable {
    fn message(&self) -> &'static str;

    fn play_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.message())
    }

    /// Writes the line to stdout. A failed stdout write is fatal, as with `println!`.
    fn play(&self) {
        if let Err(e) = self.play_to(&mut io::stdout().lock()) {
            panic!("failed printing to stdout: {}", e);
        }
    }
}

pub trait TextStage {
    fn stage(&self) -> Stage;
    fn apply(&self, input: &str) -> String;
}

pub trait Pipeline {
    fn extract(&self) -> Result<String>;
    fn transform(&self, input: String) -> Result<TransformResult>;
    fn load(&self, result: &TransformResult) -> Result<String>;
}
