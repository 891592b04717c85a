use crate::domain::animals::{Animal, Lion, Mouse, Snake};
use crate::domain::model::{Principle, Transcript, Variant};
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;

/// Don't do: every new animal means editing `animal_sound`.
pub mod violation {
    #[derive(Debug, Clone)]
    pub struct NamedAnimal {
        pub name: String,
    }

    impl NamedAnimal {
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }
    }

    pub fn animal_sound(animals: &[NamedAnimal]) -> Vec<String> {
        let mut sounds = Vec::new();
        for animal in animals {
            if animal.name == "lion" {
                sounds.push("roar".to_string());
            } else if animal.name == "mouse" {
                sounds.push("squeak".to_string());
            }
        }
        sounds
    }
}

pub mod compliant {
    use crate::domain::animals::{Animal, Sound};

    /// New animals extend this without touching it.
    pub fn animal_sound(animals: &[Box<dyn Animal>]) -> Vec<Sound> {
        animals.iter().map(|animal| animal.make_sound()).collect()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OcpDemo;

impl Demonstration for OcpDemo {
    fn principle(&self) -> Principle {
        Principle::Ocp
    }

    fn run(&self, variant: Variant) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.principle(), variant);

        match variant {
            Variant::Violation => {
                let animals = vec![
                    violation::NamedAnimal::new("lion"),
                    violation::NamedAnimal::new("mouse"),
                ];
                for sound in violation::animal_sound(&animals) {
                    transcript.push(sound);
                }
            }
            Variant::Compliant => {
                let animals: Vec<Box<dyn Animal>> = vec![
                    Box::new(Lion::new("l")),
                    Box::new(Mouse::new("m")),
                    Box::new(Snake::new("s")),
                ];
                for sound in compliant::animal_sound(&animals) {
                    transcript.push(sound.as_str());
                }
            }
        }

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::animals::{Ant, Sound};

    #[test]
    fn test_uniform_dispatch_keeps_order() {
        let animals: Vec<Box<dyn Animal>> = vec![
            Box::new(Lion::new("l")),
            Box::new(Mouse::new("m")),
            Box::new(Snake::new("s")),
        ];
        let sounds: Vec<&str> = compliant::animal_sound(&animals)
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(sounds, vec!["roar", "squeak", "hiss"]);
    }

    #[test]
    fn test_new_variant_needs_no_dispatch_change() {
        let animals: Vec<Box<dyn Animal>> = vec![Box::new(Ant::new("a"))];
        assert_eq!(compliant::animal_sound(&animals), vec![Sound::Chirp]);
    }

    #[test]
    fn test_violation_ignores_unknown_names() {
        let animals = vec![
            violation::NamedAnimal::new("lion"),
            violation::NamedAnimal::new("snake"),
            violation::NamedAnimal::new("mouse"),
        ];
        assert_eq!(violation::animal_sound(&animals), vec!["roar", "squeak"]);
    }

    #[test]
    fn test_demo_transcripts() {
        let bad = OcpDemo.run(Variant::Violation).unwrap();
        assert_eq!(bad.lines, vec!["roar", "squeak"]);

        let good = OcpDemo.run(Variant::Compliant).unwrap();
        assert_eq!(good.lines, vec!["roar", "squeak", "hiss"]);
    }
}
