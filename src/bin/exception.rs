use oop_principles::oop::exceptions::DivisionDemo;
use oop_principles::run_standalone;

fn main() {
    run_standalone(&DivisionDemo);
}
