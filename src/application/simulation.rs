//! Drives the domain engine and collects the run's history.

use log::debug;

use crate::domain::{World, evolve};

/// Run the world forward and keep every state along the way.
///
/// The returned history holds `generations + 1` entries: the initial world
/// first, then one entry per step. Every entry is an independent snapshot
/// and the input world is never touched. Negative counts collect nothing
/// beyond the initial state.
pub fn simulate(initial: &World, generations: i64) -> Vec<World> {
    let steps = generations.max(0) as usize;

    let mut history = Vec::with_capacity(steps + 1);
    let mut current = initial.clone();
    for generation in 1..=steps {
        let next = evolve(&current);
        debug!(
            "generation {}: population {} -> {}",
            generation,
            current.population(),
            next.population()
        );
        history.push(current);
        current = next;
    }
    history.push(current);
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pattern;

    #[test]
    fn test_history_starts_with_the_initial_world() {
        let initial = Pattern::RPentomino.world();
        let history = simulate(&initial, 3);

        assert_eq!(history.len(), 4);
        assert_eq!(history[0], initial);
        assert_eq!(initial, Pattern::RPentomino.world());
    }

    #[test]
    fn test_zero_generations() {
        let initial = Pattern::Square.world();
        let history = simulate(&initial, 0);
        assert_eq!(history, vec![initial]);
    }

    #[test]
    fn test_negative_generations_yield_initial_only() {
        let initial = Pattern::Glider.world();
        let history = simulate(&initial, -7);
        assert_eq!(history, vec![initial]);
    }

    #[test]
    fn test_successive_states_follow_the_engine() {
        let horizontal: World = [(0, 0), (1, 0), (2, 0)].into_iter().collect();
        let vertical: World = [(1, -1), (1, 0), (1, 1)].into_iter().collect();

        let history = simulate(&horizontal, 2);
        assert_eq!(history, vec![horizontal.clone(), vertical, horizontal]);
    }

    #[test]
    fn test_still_life_history_is_constant() {
        let square = Pattern::Square.world();
        for state in simulate(&square, 5) {
            assert_eq!(state, square);
        }
    }
}
