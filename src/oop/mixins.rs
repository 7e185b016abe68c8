//! Mixins as traits with provided methods.
//!
//! Each type opts into the behavior bundles it wants with an empty `impl`. A type
//! that never opted in simply has no such method; the compiler rejects the call.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::transcript::Transcript;

pub trait MessageOne {
    fn msg1(&self) -> &'static str {
        "OOP is fun! "
    }
}

pub trait MessageTwo {
    fn msg2(&self) -> &'static str {
        "OOP reduces code duplication!"
    }
}

/// Uses only [`MessageOne`], so `msg2` does not exist on it:
///
/// ```compile_fail
/// use oop_principles::oop::mixins::{MessageTwo, Welcome};
///
/// let _ = Welcome.msg2();
/// ```
///
/// ```
/// use oop_principles::oop::mixins::{MessageOne, Welcome};
///
/// assert_eq!(Welcome.msg1(), "OOP is fun! ");
/// ```
#[derive(Debug, Default)]
pub struct Welcome;

impl MessageOne for Welcome {}

/// Uses both bundles.
#[derive(Debug, Default)]
pub struct Welcome2;

impl MessageOne for Welcome2 {}
impl MessageTwo for Welcome2 {}

pub struct TraitsDemo;

impl Demo for TraitsDemo {
    fn name(&self) -> &'static str {
        "traits"
    }

    fn summary(&self) -> &'static str {
        "two independent behavior bundles mixed into one type"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        let obj = Welcome;
        out.line(obj.msg1());

        let obj2 = Welcome2;
        out.line(obj2.msg1());
        out.line(obj2.msg2());
        Ok(())
    }
}
