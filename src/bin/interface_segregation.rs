use oop_principles::run_standalone;
use oop_principles::solid::interface_segregation::InterfaceSegregationDemo;

fn main() {
    run_standalone(&InterfaceSegregationDemo);
}
