use oop_principles::run_standalone;
use oop_principles::solid::open_closed::OpenClosedDemo;

fn main() {
    run_standalone(&OpenClosedDemo);
}
