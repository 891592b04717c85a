use crate::domain::animals::{Animal, Ant, Lion, Mouse};
use crate::domain::model::{Principle, Transcript, Variant};
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::any::Any;

/// Don't do: the caller has to know every concrete type up front.
pub mod violation {
    use crate::domain::animals::{Ant, Lion};
    use std::any::Any;

    pub fn lion_leg_count(_lion: &Lion) -> u32 {
        4
    }

    pub fn ant_leg_count(_ant: &Ant) -> u32 {
        6
    }

    /// Types it was not written for are silently skipped.
    pub fn animal_leg_count(animals: &[&dyn Any]) -> Vec<u32> {
        let mut counts = Vec::new();
        for animal in animals {
            if let Some(lion) = animal.downcast_ref::<Lion>() {
                counts.push(lion_leg_count(lion));
            } else if let Some(ant) = animal.downcast_ref::<Ant>() {
                counts.push(ant_leg_count(ant));
            }
        }
        counts
    }
}

pub mod compliant {
    use crate::domain::animals::{Animal, Sound};

    pub fn animal_sound(animal: &dyn Animal) -> Sound {
        animal.make_sound()
    }

    pub fn animal_leg_count(animals: &[&dyn Animal]) -> Vec<u32> {
        animals.iter().map(|animal| animal.leg_count()).collect()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LspDemo;

impl Demonstration for LspDemo {
    fn principle(&self) -> Principle {
        Principle::Lsp
    }

    fn run(&self, variant: Variant) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.principle(), variant);
        let lion = Lion::new("l");
        let ant = Ant::new("a");

        match variant {
            Variant::Violation => {
                let animals: [&dyn Any; 2] = [&lion, &ant];
                for count in violation::animal_leg_count(&animals) {
                    transcript.push(count.to_string());
                }
            }
            Variant::Compliant => {
                let mouse = Mouse::new("m");
                let animals: [&dyn Animal; 3] = [&lion, &mouse, &ant];
                for animal in animals {
                    transcript.push(compliant::animal_sound(animal).as_str());
                }
                for count in compliant::animal_leg_count(&animals) {
                    transcript.push(count.to_string());
                }
            }
        }

        Ok(transcript)
    }
}
