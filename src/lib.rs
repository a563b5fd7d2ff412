// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - text output
pub mod rendering;

// Re-exports for convenience
pub use application::simulate;
pub use domain::{
    Bounds, Cell, Pattern, UnknownPatternError, World, evolve, evolve_parallel, will_be_alive,
};
pub use rendering::{DEAD_GLYPH, LIVING_GLYPH, glyph, render};
