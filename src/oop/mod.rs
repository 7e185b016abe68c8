//! Core object-oriented concepts expressed with traits.

pub mod abstraction;
pub mod exceptions;
pub mod interfaces;
pub mod mixins;
