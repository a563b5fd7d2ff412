mod simulation;

pub use simulation::simulate;
