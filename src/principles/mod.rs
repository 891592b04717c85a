// One module per principle. Each pairs a `violation` ("don't do") half with a `compliant` half.

pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;

pub use dip::DipDemo;
pub use isp::IspDemo;
pub use lsp::LspDemo;
pub use ocp::OcpDemo;
pub use srp::SrpDemo;

pub fn for_principle(principle: Principle) -> Box<dyn Demonstration> {
    match principle {
        Principle::Srp => Box::new(SrpDemo),
        Principle::Ocp => Box::new(OcpDemo),
        Principle::Lsp => Box::new(LspDemo),
        Principle::Isp => Box::new(IspDemo),
        Principle::Dip => Box::new(DipDemo),
    }
}

pub fn all() -> Vec<Box<dyn Demonstration>> {
    Principle::all().into_iter().map(for_principle).collect()
}
