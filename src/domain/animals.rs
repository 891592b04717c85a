use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    Roar,
    Squeak,
    Hiss,
    Chirp,
}

impl Sound {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Roar => "roar",
            Sound::Squeak => "squeak",
            Sound::Hiss => "hiss",
            Sound::Chirp => "chirp",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every capability is required: a variant that forgets one does not compile.
pub trait Animal {
    fn name(&self) -> &str;
    fn make_sound(&self) -> Sound;
    fn leg_count(&self) -> u32;
}

#[derive(Debug, Clone)]
pub struct Lion {
    name: String,
}

impl Lion {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Lion {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> Sound {
        Sound::Roar
    }

    fn leg_count(&self) -> u32 {
        4
    }
}

#[derive(Debug, Clone)]
pub struct Mouse {
    name: String,
}

impl Mouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Mouse {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> Sound {
        Sound::Squeak
    }

    fn leg_count(&self) -> u32 {
        4
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    name: String,
}

impl Snake {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Snake {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> Sound {
        Sound::Hiss
    }

    fn leg_count(&self) -> u32 {
        0
    }
}

#[derive(Debug, Clone)]
pub struct Ant {
    name: String,
}

impl Ant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Ant {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> Sound {
        Sound::Chirp
    }

    fn leg_count(&self) -> u32 {
        6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_variant_has_fixed_sound() {
        assert_eq!(Lion::new("l").make_sound().as_str(), "roar");
        assert_eq!(Mouse::new("m").make_sound().as_str(), "squeak");
        assert_eq!(Snake::new("s").make_sound().as_str(), "hiss");
        assert_eq!(Ant::new("a").make_sound().as_str(), "chirp");
    }

    #[test]
    fn test_leg_counts() {
        assert_eq!(Lion::new("l").leg_count(), 4);
        assert_eq!(Ant::new("a").leg_count(), 6);
        assert_eq!(Snake::new("s").leg_count(), 0);
    }

    #[test]
    fn test_name_is_kept() {
        let mouse = Mouse::new("jerry");
        assert_eq!(mouse.name(), "jerry");
    }
}
