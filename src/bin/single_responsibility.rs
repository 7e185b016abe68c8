use oop_principles::run_standalone;
use oop_principles::solid::single_responsibility::SingleResponsibilityDemo;

fn main() {
    run_standalone(&SingleResponsibilityDemo);
}
