use oop_principles::run_standalone;
use oop_principles::solid::dependency_inversion::PrintableDemo;

fn main() {
    run_standalone(&PrintableDemo);
}
