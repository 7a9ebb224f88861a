//! The generation transition rule.
//!
//! Two named variants are supported:
//!
//! * `Extended` (B3/S234) — the rule this simulation settled on: a live cell
//!   with 4 neighbors survives and ages instead of dying of overpopulation.
//! * `StrictConway` (B3/S23) — the textbook rule, kept for comparison; under
//!   it the classic spaceships behave exactly as published.

use crate::cell::Cell;

/// Which survival boundary to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleVariant {
    /// Live cells survive on 2..=4 neighbors; dead cells are born on exactly 3.
    #[default]
    Extended,
    /// Live cells survive on 2..=3 neighbors; dead cells are born on exactly 3.
    StrictConway,
}

impl RuleVariant {
    /// Maximum neighbor count a live cell survives with.
    fn survival_max(self) -> u8 {
        match self {
            RuleVariant::Extended => 4,
            RuleVariant::StrictConway => 3,
        }
    }

    /// The other variant, for cycling from a UI.
    pub fn toggled(self) -> Self {
        match self {
            RuleVariant::Extended => RuleVariant::StrictConway,
            RuleVariant::StrictConway => RuleVariant::Extended,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleVariant::Extended => "Extended (B3/S234)",
            RuleVariant::StrictConway => "Conway (B3/S23)",
        }
    }
}

/// Computes the next state of one cell from its live-neighbor count.
///
/// Total over every `(alive, age, live_neighbors)` combination; coordinates
/// are copied unchanged. Age is reset to 0 on death, set to 1 on birth and
/// incremented on survival.
pub fn next_cell_state(cell: &Cell, live_neighbors: u8, rule: RuleVariant) -> Cell {
    match (cell.alive, live_neighbors) {
        (true, n) if n >= 2 && n <= rule.survival_max() => cell.survived(),
        (true, _) => Cell::dead(cell.x, cell.y),
        (false, 3) => Cell::born(cell.x, cell.y),
        (false, _) => *cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive(age: u32) -> Cell {
        Cell {
            x: 2,
            y: 5,
            alive: true,
            age,
        }
    }

    #[test]
    fn live_cell_dies_of_underpopulation() {
        for n in 0..=1 {
            for rule in [RuleVariant::Extended, RuleVariant::StrictConway] {
                let next = next_cell_state(&alive(4), n, rule);
                assert!(!next.alive, "survived with {} neighbors", n);
                assert_eq!(next.age, 0);
            }
        }
    }

    #[test]
    fn live_cell_survives_and_ages_on_two_or_three() {
        for n in 2..=3 {
            for rule in [RuleVariant::Extended, RuleVariant::StrictConway] {
                let next = next_cell_state(&alive(4), n, rule);
                assert!(next.alive, "died with {} neighbors", n);
                assert_eq!(next.age, 5);
            }
        }
    }

    #[test]
    fn four_neighbors_is_the_variant_boundary() {
        let extended = next_cell_state(&alive(1), 4, RuleVariant::Extended);
        assert!(extended.alive);
        assert_eq!(extended.age, 2);

        let strict = next_cell_state(&alive(1), 4, RuleVariant::StrictConway);
        assert!(!strict.alive);
        assert_eq!(strict.age, 0);
    }

    #[test]
    fn live_cell_dies_of_overpopulation() {
        for n in 5..=8 {
            for rule in [RuleVariant::Extended, RuleVariant::StrictConway] {
                let next = next_cell_state(&alive(9), n, rule);
                assert!(!next.alive, "survived with {} neighbors", n);
                assert_eq!(next.age, 0);
            }
        }
    }

    #[test]
    fn dead_cell_is_born_on_exactly_three() {
        let dead = Cell::dead(1, 1);
        for n in 0..=8 {
            for rule in [RuleVariant::Extended, RuleVariant::StrictConway] {
                let next = next_cell_state(&dead, n, rule);
                if n == 3 {
                    assert!(next.alive, "not born with 3 neighbors");
                    assert_eq!(next.age, 1);
                } else {
                    assert!(!next.alive, "born with {} neighbors", n);
                    assert_eq!(next.age, 0);
                }
            }
        }
    }

    #[test]
    fn coordinates_are_preserved() {
        let next = next_cell_state(&alive(1), 3, RuleVariant::Extended);
        assert_eq!((next.x, next.y), (2, 5));
    }

    #[test]
    fn toggled_cycles_between_variants() {
        assert_eq!(RuleVariant::Extended.toggled(), RuleVariant::StrictConway);
        assert_eq!(RuleVariant::StrictConway.toggled(), RuleVariant::Extended);
    }
}
