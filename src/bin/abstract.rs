use oop_principles::oop::abstraction::AbstractDemo;
use oop_principles::run_standalone;

fn main() {
    run_standalone(&AbstractDemo);
}
