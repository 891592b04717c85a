use crate::domain::model::{Principle, Transcript, Variant};
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Drawing {
    Circle,
    Rectangle,
}

impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drawing::Circle => f.write_str("drew a circle"),
            Drawing::Rectangle => f.write_str("drew a rectangle"),
        }
    }
}

/// Don't do: one fat trait, so every shape carries methods it cannot honour.
pub mod violation {
    use super::Drawing;
    use crate::utils::error::{Result, SolidError};

    pub trait FatShape {
        fn draw_circle(&self) -> Result<Drawing>;
        fn draw_rectangle(&self) -> Result<Drawing>;
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct Circle;

    impl FatShape for Circle {
        fn draw_circle(&self) -> Result<Drawing> {
            Ok(Drawing::Circle)
        }

        fn draw_rectangle(&self) -> Result<Drawing> {
            Err(SolidError::not_implemented("Circle", "draw_rectangle"))
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct Rectangle;

    impl FatShape for Rectangle {
        fn draw_circle(&self) -> Result<Drawing> {
            Err(SolidError::not_implemented("Rectangle", "draw_circle"))
        }

        fn draw_rectangle(&self) -> Result<Drawing> {
            Ok(Drawing::Rectangle)
        }
    }
}

pub mod compliant {
    use super::Drawing;
    use crate::utils::error::{Result, SolidError};

    pub trait Shape {
        fn draw(&self) -> Result<Drawing>;
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct Circle;

    impl Shape for Circle {
        fn draw(&self) -> Result<Drawing> {
            Ok(Drawing::Circle)
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct Rectangle;

    impl Shape for Rectangle {
        fn draw(&self) -> Result<Drawing> {
            Ok(Drawing::Rectangle)
        }
    }

    /// The bare abstract form. It has nothing to draw.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct AbstractShape;

    impl Shape for AbstractShape {
        fn draw(&self) -> Result<Drawing> {
            Err(SolidError::not_implemented("Shape", "draw"))
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IspDemo;

impl Demonstration for IspDemo {
    fn principle(&self) -> Principle {
        Principle::Isp
    }

    fn run(&self, variant: Variant) -> Result<Transcript> {
        use compliant::Shape;
        use violation::FatShape;

        let mut transcript = Transcript::new(self.principle(), variant);

        match variant {
            Variant::Violation => match violation::Circle.draw_rectangle() {
                Ok(drawing) => transcript.push(drawing.to_string()),
                Err(e) => {
                    tracing::debug!("Fat interface call failed: {}", e);
                    transcript.push(format!("circle asked to draw a rectangle: {}", e));
                }
            },
            Variant::Compliant => {
                let shapes: [&dyn Shape; 2] = [&compliant::Circle, &compliant::Rectangle];
                for shape in shapes {
                    transcript.push(shape.draw()?.to_string());
                }
            }
        }

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::compliant::{AbstractShape, Shape};
    use super::violation::FatShape;
    use super::*;
    use crate::utils::error::SolidError;

    #[test]
    fn test_concrete_shapes_draw() {
        assert_eq!(compliant::Circle.draw().unwrap(), Drawing::Circle);
        assert_eq!(compliant::Rectangle.draw().unwrap(), Drawing::Rectangle);
    }

    #[test]
    fn test_abstract_shape_is_not_implemented() {
        let err = AbstractShape.draw().unwrap_err();
        assert!(matches!(
            err,
            SolidError::NotImplemented {
                type_name: "Shape",
                capability: "draw"
            }
        ));
    }

    #[test]
    fn test_fat_interface_forces_dead_methods() {
        assert!(violation::Circle.draw_circle().is_ok());
        assert!(violation::Circle.draw_rectangle().is_err());
        assert!(violation::Rectangle.draw_circle().is_err());
        assert!(violation::Rectangle.draw_rectangle().is_ok());
    }

    #[test]
    fn test_demo_transcripts() {
        let bad = IspDemo.run(Variant::Violation).unwrap();
        assert_eq!(
            bad.lines,
            vec!["circle asked to draw a rectangle: Circle::draw_rectangle is not implemented"]
        );

        let good = IspDemo.run(Variant::Compliant).unwrap();
        assert_eq!(good.lines, vec!["drew a circle", "drew a rectangle"]);
    }
}
