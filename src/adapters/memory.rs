use crate::core::{Sink, Transcript};
use crate::utils::error::Result;

/// Keeps every emitted transcript, for tests and library callers.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    transcripts: Vec<Transcript>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcripts(&self) -> &[Transcript] {
        &self.transcripts
    }
}

impl Sink for MemorySink {
    fn emit(&mut self, transcript: &Transcript) -> Result<()> {
        self.transcripts.push(transcript.clone());
        Ok(())
    }
}
