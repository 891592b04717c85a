use crate::core::{OutputFormat, Sink, Transcript};
use crate::utils::error::Result;
use std::io::{self, Stdout, Write};

pub struct ConsoleSink<W: Write> {
    writer: W,
    format: OutputFormat,
    show_definitions: bool,
}

impl ConsoleSink<Stdout> {
    pub fn stdout(format: OutputFormat, show_definitions: bool) -> Self {
        Self::new(io::stdout(), format, show_definitions)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, format: OutputFormat, show_definitions: bool) -> Self {
        Self {
            writer,
            format,
            show_definitions,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_text(&mut self, transcript: &Transcript) -> Result<()> {
        let principle = transcript.principle;
        writeln!(
            self.writer,
            "== {} ({}) :: {}",
            principle.acronym(),
            principle.title(),
            transcript.variant
        )?;
        if self.show_definitions {
            writeln!(self.writer, "-- {}", principle.definition())?;
        }
        for line in &transcript.lines {
            writeln!(self.writer, "{}", line)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn emit(&mut self, transcript: &Transcript) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(transcript)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, transcript)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
