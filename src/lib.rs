//! # Object-Oriented Design in Rust
//!
//! Small, self-contained demonstrations of object-oriented concepts and the SOLID
//! principles, expressed with traits instead of class hierarchies.
//!
//! ## OOP concepts (`oop`)
//! - Abstract base types: a trait with one provided and one required method
//! - Interfaces: a trait every variant implements in full
//! - Mixins: independent traits with provided methods, composed per type
//! - Exceptions: `Result` outcomes with a failure-kind tag
//!
//! ## SOLID principles (`solid`)
//! - Single responsibility: data and presentation live in separate types
//! - Open/closed: new shapes without touching the calculator
//! - Liskov substitution: a deliberately broken substitution (penguins)
//! - Interface segregation: printer and scanner contracts kept apart
//! - Dependency inversion: managers depend on repository traits
//!
//! Every demonstration implements [`Demo`] and writes its output to a
//! [`Transcript`]. Run them all with `cargo run --bin oop-demos`, or one at a time
//! with `cargo run --bin <name>`.

pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod oop;
pub mod solid;
pub mod transcript;

pub use demo::{
    capture, catalog, find, listing, render_all, render_standalone, run_standalone, select, Demo,
    UnknownDemo,
};
pub use error::{ConfigError, DemoError, FailureKind, Raised};
pub use transcript::Transcript;
