//! Liskov substitution, shown by breaking it.
//!
//! `Penguin` satisfies `Bird` at the type level but fails `fly`, so code written
//! against `Bird` stops working when handed a penguin. Kept as the counter-example;
//! a sound design would move `fly` into its own `FlyingBird` trait.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::transcript::Transcript;

pub trait Bird {
    fn fly(&self) -> Result<String, DemoError>;
    fn make_sound(&self) -> String;
}

#[derive(Debug, Default)]
pub struct Sparrow;

impl Bird for Sparrow {
    fn fly(&self) -> Result<String, DemoError> {
        Ok("Sparrow is flying.".to_string())
    }

    fn make_sound(&self) -> String {
        "Chirp chirp!".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Penguin;

impl Bird for Penguin {
    fn fly(&self) -> Result<String, DemoError> {
        Err(DemoError::unsupported("Penguins can't fly."))
    }

    fn make_sound(&self) -> String {
        "Honk honk!".to_string()
    }
}

#[derive(Debug, Default)]
pub struct BirdWatcher;

impl BirdWatcher {
    /// Records the flight and then the sound. A failed flight ends the observation.
    pub fn observe(&self, bird: &dyn Bird, out: &mut Transcript) -> Result<(), DemoError> {
        out.line(bird.fly()?);
        out.line(bird.make_sound());
        Ok(())
    }

    pub fn observe_all(
        &self,
        birds: &[&dyn Bird],
        out: &mut Transcript,
    ) -> Result<(), DemoError> {
        for bird in birds {
            self.observe(*bird, out)?;
        }
        Ok(())
    }
}

pub struct LiskovSubstitutionDemo;

impl Demo for LiskovSubstitutionDemo {
    fn name(&self) -> &'static str {
        "liskov-substitution"
    }

    fn summary(&self) -> &'static str {
        "a subtype that cannot honor its contract (penguins can't fly)"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        let birds: [&dyn Bird; 2] = [&Sparrow, &Penguin];
        if let Err(err) = BirdWatcher.observe_all(&birds, out) {
            out.line(err.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparrow() {
        assert_eq!(Sparrow.fly().unwrap(), "Sparrow is flying.");
        assert_eq!(Sparrow.make_sound(), "Chirp chirp!");
    }

    #[test]
    fn test_penguin_cannot_fly() {
        let err = Penguin.fly().unwrap_err();
        assert!(matches!(err, DemoError::Unsupported(_)));
        assert_eq!(err.to_string(), "Penguins can't fly.");
        assert_eq!(Penguin.make_sound(), "Honk honk!");
    }

    #[test]
    fn test_observe_stops_at_failed_flight() {
        let mut out = Transcript::new();
        let result = BirdWatcher.observe(&Penguin, &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_observe_all_sparrows() {
        let mut out = Transcript::new();
        BirdWatcher.observe_all(&[&Sparrow, &Sparrow], &mut out).unwrap();
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_substitution_through_trait_object() {
        let birds: Vec<Box<dyn Bird>> = vec![Box::new(Sparrow), Box::new(Penguin)];
        let flights: Vec<bool> = birds.iter().map(|b| b.fly().is_ok()).collect();
        assert_eq!(flights, [true, false]);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        LiskovSubstitutionDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            ["Sparrow is flying.", "Chirp chirp!", "Penguins can't fly."]
        );
    }
}
