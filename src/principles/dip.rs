use crate::domain::model::{Principle, Transcript, Variant};
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;

/// Don't do: the manager depends on each concrete kind of employee.
pub mod violation {
    #[derive(Debug, Default, Clone)]
    pub struct Developer;

    #[derive(Debug, Default, Clone)]
    pub struct Designer;

    #[derive(Debug, Default)]
    pub struct Manager {
        pub developers: Vec<Developer>,
        pub designers: Vec<Designer>,
    }

    impl Manager {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_developer(&mut self, developer: Developer) {
            self.developers.push(developer);
        }

        pub fn add_designer(&mut self, designer: Designer) {
            self.designers.push(designer);
        }
    }
}

pub mod compliant {
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Role {
        Developer,
        Designer,
    }

    impl fmt::Display for Role {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Role::Developer => f.write_str("developer"),
                Role::Designer => f.write_str("designer"),
            }
        }
    }

    pub trait Employee {
        fn role(&self) -> Role;
    }

    #[derive(Debug, Default, Clone)]
    pub struct Developer;

    impl Employee for Developer {
        fn role(&self) -> Role {
            Role::Developer
        }
    }

    #[derive(Debug, Default, Clone)]
    pub struct Designer;

    impl Employee for Designer {
        fn role(&self) -> Role {
            Role::Designer
        }
    }

    #[derive(Default)]
    pub struct Manager {
        employees: Vec<Box<dyn Employee>>,
    }

    impl Manager {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_employee(&mut self, employee: impl Employee + 'static) {
            tracing::debug!("Adding {} to manager", employee.role());
            self.employees.push(Box::new(employee));
        }

        pub fn employees(&self) -> &[Box<dyn Employee>] {
            &self.employees
        }

        pub fn len(&self) -> usize {
            self.employees.len()
        }

        pub fn is_empty(&self) -> bool {
            self.employees.is_empty()
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DipDemo;

impl Demonstration for DipDemo {
    fn principle(&self) -> Principle {
        Principle::Dip
    }

    fn run(&self, variant: Variant) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.principle(), variant);

        match variant {
            Variant::Violation => {
                let mut manager = violation::Manager::new();
                manager.add_developer(violation::Developer);
                manager.add_designer(violation::Designer);
                transcript.push(format!(
                    "manager tracks {} developer(s) and {} designer(s) in separate lists",
                    manager.developers.len(),
                    manager.designers.len()
                ));
            }
            Variant::Compliant => {
                let mut manager = compliant::Manager::new();
                manager.add_employee(compliant::Developer);
                manager.add_employee(compliant::Designer);
                for employee in manager.employees() {
                    transcript.push(format!("{} added", employee.role()));
                }
            }
        }

        Ok(transcript)
    }
}
