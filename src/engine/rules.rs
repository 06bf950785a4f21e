//! Transition rules applied in priority order

use super::grid::CellState;

/// A single transition rule: a pure partial function from (current
/// state, alive-neighbor count) to the next state. `Some` decides the
/// outcome, `None` defers to the next rule in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Alive cell with fewer than 2 neighbors dies.
    Underpopulation,
    /// Alive cell with 2 or 3 neighbors stays alive.
    Survival,
    /// Alive cell with more than 3 neighbors dies.
    Overcrowding,
    /// Dead cell with exactly 3 neighbors becomes alive.
    Birth,
}

impl Rule {
    pub fn apply(self, current: CellState, neighbors: u8) -> Option<CellState> {
        match self {
            Rule::Underpopulation => {
                (current.is_alive() && neighbors < 2).then_some(CellState::Dead)
            }
            Rule::Survival => {
                (current.is_alive() && (neighbors == 2 || neighbors == 3))
                    .then_some(CellState::Alive)
            }
            Rule::Overcrowding => {
                (current.is_alive() && neighbors > 3).then_some(CellState::Dead)
            }
            Rule::Birth => {
                (!current.is_alive() && neighbors == 3).then_some(CellState::Alive)
            }
        }
    }
}

/// An ordered list of rules with first-match-wins semantics.
///
/// Rules are evaluated against the pre-tick state and pre-tick neighbor
/// counts; if no rule decides, the cell keeps its current state. An
/// unordered dispatch cannot express this priority, hence the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    rules: Vec<Rule>,
}

impl Ruleset {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The canonical Game of Life rule set in its required order.
    pub fn conway() -> Self {
        Self::new(vec![
            Rule::Underpopulation,
            Rule::Survival,
            Rule::Overcrowding,
            Rule::Birth,
        ])
    }

    /// Next state of a cell given its pre-tick state and neighbor count.
    pub fn next_state(&self, current: CellState, neighbors: u8) -> CellState {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(current, neighbors))
            .unwrap_or(current)
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::conway()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::{Alive, Dead};

    #[test]
    fn test_conway_truth_table() {
        let rules = Ruleset::conway();
        for neighbors in 0..=8 {
            let from_alive = rules.next_state(Alive, neighbors);
            let from_dead = rules.next_state(Dead, neighbors);
            match neighbors {
                2 => {
                    assert_eq!(from_alive, Alive);
                    assert_eq!(from_dead, Dead);
                }
                3 => {
                    assert_eq!(from_alive, Alive);
                    assert_eq!(from_dead, Alive);
                }
                _ => {
                    assert_eq!(from_alive, Dead);
                    assert_eq!(from_dead, Dead);
                }
            }
        }
    }

    #[test]
    fn test_first_decisive_rule_wins() {
        let reordered = Ruleset::new(vec![Rule::Survival, Rule::Underpopulation]);
        assert_eq!(reordered.next_state(Alive, 2), Alive);
        assert_eq!(reordered.next_state(Alive, 1), Dead);
        // A rule that decides stops evaluation; later rules never see
        // the cell.
        let all_dead = Ruleset::new(vec![Rule::Underpopulation, Rule::Overcrowding, Rule::Survival]);
        assert_eq!(all_dead.next_state(Alive, 3), Alive);
    }

    #[test]
    fn test_no_decisive_rule_keeps_state() {
        let partial = Ruleset::new(vec![Rule::Birth]);
        // Birth never fires for these inputs, so the state is unchanged.
        assert_eq!(partial.next_state(Alive, 0), Alive);
        assert_eq!(partial.next_state(Dead, 2), Dead);
        assert_eq!(partial.next_state(Dead, 3), Alive);
    }

    #[test]
    fn test_individual_rules_defer() {
        assert_eq!(Rule::Underpopulation.apply(Dead, 0), None);
        assert_eq!(Rule::Underpopulation.apply(Alive, 1), Some(Dead));
        assert_eq!(Rule::Survival.apply(Alive, 4), None);
        assert_eq!(Rule::Overcrowding.apply(Alive, 4), Some(Dead));
        assert_eq!(Rule::Birth.apply(Dead, 3), Some(Alive));
        assert_eq!(Rule::Birth.apply(Alive, 3), None);
    }
}
