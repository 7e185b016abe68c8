use oop_principles::oop::mixins::TraitsDemo;
use oop_principles::run_standalone;

fn main() {
    run_standalone(&TraitsDemo);
}
