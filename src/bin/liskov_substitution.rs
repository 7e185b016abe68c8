use oop_principles::run_standalone;
use oop_principles::solid::liskov_substitution::LiskovSubstitutionDemo;

fn main() {
    run_standalone(&LiskovSubstitutionDemo);
}
