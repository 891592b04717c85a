use crate::core::{ConfigProvider, Principle, Sink, Transcript};
use crate::principles;
use crate::utils::error::Result;

pub struct DemoEngine<S: Sink> {
    sink: S,
}

impl<S: Sink> DemoEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn run(&mut self, config: &dyn ConfigProvider) -> Result<Vec<Transcript>> {
        let mut selected: Vec<Principle> = config.principles().to_vec();
        selected.sort();
        selected.dedup();

        tracing::info!(
            "Running {} principle(s): {}",
            selected.len(),
            selected
                .iter()
                .map(|p| p.acronym())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut transcripts = Vec::new();
        for principle in selected {
            let demo = principles::for_principle(principle);
            for &variant in config.variants() {
                tracing::debug!("Running {} ({})", principle.title(), variant);
                let transcript = demo.run(variant)?;
                tracing::debug!("{} {} printed {} line(s)", principle, variant, transcript.lines.len());

                self.sink.emit(&transcript)?;
                transcripts.push(transcript);
            }
        }

        tracing::info!("Finished {} demonstration(s)", transcripts.len());
        Ok(transcripts)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemorySink;
    use crate::core::{OutputFormat, Variant};

    struct MockConfig {
        principles: Vec<Principle>,
        variants: Vec<Variant>,
    }

    impl ConfigProvider for MockConfig {
        fn principles(&self) -> &[Principle] {
            &self.principles
        }

        fn variants(&self) -> &[Variant] {
            &self.variants
        }

        fn output_format(&self) -> OutputFormat {
            OutputFormat::Text
        }

        fn show_definitions(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_runs_selection_in_canonical_order() {
        let config = MockConfig {
            principles: vec![Principle::Dip, Principle::Srp, Principle::Dip],
            variants: vec![Variant::Compliant],
        };
        let mut engine = DemoEngine::new(MemorySink::new());

        let transcripts = engine.run(&config).unwrap();

        let principles: Vec<Principle> = transcripts.iter().map(|t| t.principle).collect();
        assert_eq!(principles, vec![Principle::Srp, Principle::Dip]);
        assert_eq!(engine.sink().transcripts().len(), 2);
    }

    #[test]
    fn test_runs_variants_in_given_order() {
        let config = MockConfig {
            principles: vec![Principle::Ocp],
            variants: vec![Variant::Violation, Variant::Compliant],
        };
        let mut engine = DemoEngine::new(MemorySink::new());

        engine.run(&config).unwrap();

        let sink = engine.into_sink();
        let variants: Vec<Variant> = sink.transcripts().iter().map(|t| t.variant).collect();
        assert_eq!(variants, vec![Variant::Violation, Variant::Compliant]);
    }
}
