use oop_principles::oop::exceptions::RequestDemo;
use oop_principles::run_standalone;

fn main() {
    run_standalone(&RequestDemo);
}
