mod bounds;
mod cell;
mod engine;
mod patterns;
mod rules;
mod world;

pub use bounds::Bounds;
pub use cell::Cell;
pub use engine::{evolve, evolve_parallel};
pub use patterns::{Pattern, UnknownPatternError};
pub use rules::will_be_alive;
pub use world::World;
