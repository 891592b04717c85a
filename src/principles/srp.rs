use crate::domain::model::{Principle, Transcript, Variant};
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;

/// Don't do: the entity knows both what it is and how it gets stored.
pub mod violation {
    use crate::utils::error::Result;
    use serde::Serialize;

    #[derive(Debug, Clone, Serialize)]
    pub struct Animal {
        pub name: String,
    }

    impl Animal {
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }

        /// A change to the storage format now means a change to `Animal`.
        pub fn save(&self) -> Result<String> {
            Ok(serde_json::to_string(self)?)
        }
    }
}

pub mod compliant {
    use crate::utils::error::Result;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Animal {
        name: String,
    }

    impl Animal {
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }

        pub fn name(&self) -> &str {
            &self.name
        }
    }

    /// Persistence lives here and only here.
    #[derive(Debug, Default)]
    pub struct AnimalDb {
        records: Vec<String>,
    }

    impl AnimalDb {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn save(&mut self, animal: &Animal) -> Result<()> {
            let record = serde_json::to_string(animal)?;
            tracing::debug!("Saving animal record: {}", record);
            self.records.push(record);
            Ok(())
        }

        pub fn records(&self) -> &[String] {
            &self.records
        }

        pub fn len(&self) -> usize {
            self.records.len()
        }

        pub fn is_empty(&self) -> bool {
            self.records.is_empty()
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SrpDemo;

impl Demonstration for SrpDemo {
    fn principle(&self) -> Principle {
        Principle::Srp
    }

    fn run(&self, variant: Variant) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.principle(), variant);

        match variant {
            Variant::Violation => {
                let ape = violation::Animal::new("ape");
                let record = ape.save()?;
                transcript.push(format!("{} saved itself as {}", ape.name, record));
            }
            Variant::Compliant => {
                let ape = compliant::Animal::new("ape");
                let mut db = compliant::AnimalDb::new();
                db.save(&ape)?;
                for record in db.records() {
                    transcript.push(format!("AnimalDb saved {} as {}", ape.name(), record));
                }
            }
        }

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::compliant::{Animal, AnimalDb};
    use super::*;

    #[test]
    fn test_animal_is_usable_without_db() {
        let ape = Animal::new("ape");
        assert_eq!(ape.name(), "ape");
    }

    #[test]
    fn test_db_saves_in_order() {
        let mut db = AnimalDb::new();
        assert!(db.is_empty());

        db.save(&Animal::new("ape")).unwrap();
        db.save(&Animal::new("owl")).unwrap();

        assert_eq!(db.len(), 2);
        assert_eq!(db.records()[0], r#"{"name":"ape"}"#);
        assert_eq!(db.records()[1], r#"{"name":"owl"}"#);
    }

    #[test]
    fn test_violation_entity_saves_itself() {
        let ape = violation::Animal::new("ape");
        assert_eq!(ape.save().unwrap(), r#"{"name":"ape"}"#);
    }

    #[test]
    fn test_demo_compliant_transcript() {
        let transcript = SrpDemo.run(Variant::Compliant).unwrap();
        assert_eq!(transcript.principle, Principle::Srp);
        assert_eq!(
            transcript.lines,
            vec![r#"AnimalDb saved ape as {"name":"ape"}"#.to_string()]
        );
    }
}
