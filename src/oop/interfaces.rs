//! Interfaces: a contract with no default behavior, implemented in full.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::transcript::Transcript;

pub trait Animal {
    fn make_sound(&self) -> &'static str;
    fn eat(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Animal for Cat {
    fn make_sound(&self) -> &'static str {
        "Meow"
    }

    fn eat(&self) -> &'static str {
        "bite"
    }
}

pub struct InterfaceDemo;

impl Demo for InterfaceDemo {
    fn name(&self) -> &'static str {
        "interface"
    }

    fn summary(&self) -> &'static str {
        "a variant implementing every method of its interface"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        let animal: &dyn Animal = &Cat;
        out.line(animal.make_sound());
        out.line(animal.eat());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat() {
        assert_eq!(Cat.make_sound(), "Meow");
        assert_eq!(Cat.eat(), "bite");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        InterfaceDemo.run(&mut out).unwrap();
        assert_eq!(out.lines(), ["Meow", "bite"]);
    }
}
