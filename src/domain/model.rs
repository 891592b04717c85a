use crate::utils::error::SolidError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Principle {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl Principle {
    pub fn all() -> [Principle; 5] {
        [
            Principle::Srp,
            Principle::Ocp,
            Principle::Lsp,
            Principle::Isp,
            Principle::Dip,
        ]
    }

    pub fn acronym(&self) -> &'static str {
        match self {
            Principle::Srp => "SRP",
            Principle::Ocp => "OCP",
            Principle::Lsp => "LSP",
            Principle::Isp => "ISP",
            Principle::Dip => "DIP",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Principle::Srp => "Single Responsibility Principle",
            Principle::Ocp => "Open-Closed Principle",
            Principle::Lsp => "Liskov Substitution Principle",
            Principle::Isp => "Interface Segregation Principle",
            Principle::Dip => "Dependency Inversion Principle",
        }
    }

    pub fn definition(&self) -> &'static str {
        match self {
            Principle::Srp => "A type should have only one job to avoid becoming coupled.",
            Principle::Ocp => {
                "Software entities should be open for extension, not modification."
            }
            Principle::Lsp => "A subtype must be substitutable for its supertype.",
            Principle::Isp => {
                "Clients should not be forced to depend on methods that they do not use."
            }
            Principle::Dip => {
                "Higher-level types should depend upon abstractions rather than details."
            }
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.acronym())
    }
}

impl FromStr for Principle {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srp" => Ok(Principle::Srp),
            "ocp" => Ok(Principle::Ocp),
            "lsp" => Ok(Principle::Lsp),
            "isp" => Ok(Principle::Isp),
            "dip" => Ok(Principle::Dip),
            _ => Err(SolidError::UnknownPrincipleError {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Principle {
    type Error = SolidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which half of an example pair to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Variant {
    /// The "don't do" half.
    Violation,
    Compliant,
}

impl Variant {
    pub fn both() -> [Variant; 2] {
        [Variant::Violation, Variant::Compliant]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Violation => "violation",
            Variant::Compliant => "compliant",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "violation" | "bad" => Ok(Variant::Violation),
            "compliant" | "good" => Ok(Variant::Compliant),
            _ => Err(SolidError::UnknownVariantError {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Variant {
    type Error = SolidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub principle: Principle,
    pub variant: Variant,
    pub lines: Vec<String>,
}

impl Transcript {
    pub fn new(principle: Principle, variant: Variant) -> Self {
        Self {
            principle,
            variant,
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}
