use oop_principles::run_standalone;
use oop_principles::solid::dependency_inversion::RepositoryDemo;

fn main() {
    run_standalone(&RepositoryDemo);
}
