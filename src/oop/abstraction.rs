//! Abstract base types.
//!
//! A trait stands in for the abstract class: `name` is supplied once by the shared
//! [`CarBase`], `intro` has no default and every variant must write its own.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::transcript::Transcript;

/// State shared by every car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarBase {
    name: String,
}

impl CarBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub trait Car {
    fn base(&self) -> &CarBase;

    fn name(&self) -> &str {
        &self.base().name
    }

    fn intro(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Audi(CarBase);

impl Audi {
    pub fn new(name: impl Into<String>) -> Self {
        Self(CarBase::new(name))
    }
}

impl Car for Audi {
    fn base(&self) -> &CarBase {
        &self.0
    }

    fn intro(&self) -> String {
        format!("Choose German quality! I'm an {}!", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Volvo(CarBase);

impl Volvo {
    pub fn new(name: impl Into<String>) -> Self {
        Self(CarBase::new(name))
    }
}

impl Car for Volvo {
    fn base(&self) -> &CarBase {
        &self.0
    }

    fn intro(&self) -> String {
        format!("Proud to be Swedish! I'm a {}!", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Citroen(CarBase);

impl Citroen {
    pub fn new(name: impl Into<String>) -> Self {
        Self(CarBase::new(name))
    }
}

impl Car for Citroen {
    fn base(&self) -> &CarBase {
        &self.0
    }

    fn intro(&self) -> String {
        format!("French extravagance! I'm a {}!", self.name())
    }
}

pub struct AbstractDemo;

impl Demo for AbstractDemo {
    fn name(&self) -> &'static str {
        "abstract"
    }

    fn summary(&self) -> &'static str {
        "abstract base type with one required method per variant"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        let cars: [Box<dyn Car>; 3] = [
            Box::new(Audi::new("Audi")),
            Box::new(Volvo::new("Volvo")),
            Box::new(Citroen::new("Citroen")),
        ];
        for car in &cars {
            out.line(car.intro());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intros() {
        assert_eq!(Audi::new("Audi").intro(), "Choose German quality! I'm an Audi!");
        assert_eq!(Volvo::new("Volvo").intro(), "Proud to be Swedish! I'm a Volvo!");
        assert_eq!(
            Citroen::new("Citroen").intro(),
            "French extravagance! I'm a Citroen!"
        );
    }

    #[test]
    fn test_name_comes_from_base() {
        let car: &dyn Car = &Volvo::new("XC90");
        assert_eq!(car.name(), "XC90");
        assert_eq!(car.base(), &CarBase::new("XC90"));
        assert_eq!(car.intro(), "Proud to be Swedish! I'm a XC90!");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        AbstractDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            [
                "Choose German quality! I'm an Audi!",
                "Proud to be Swedish! I'm a Volvo!",
                "French extravagance! I'm a Citroen!",
            ]
        );
    }
}
