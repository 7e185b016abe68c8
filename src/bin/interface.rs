use oop_principles::oop::interfaces::InterfaceDemo;
use oop_principles::run_standalone;

fn main() {
    run_standalone(&InterfaceDemo);
}
