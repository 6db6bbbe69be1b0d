//! Conway's B3/S23 transition rule.

use tessel_core::CellState;

/// Next state of a cell with `live_neighbours` live neighbours.
///
/// A live cell survives with 2 or 3 live neighbours and dies otherwise.
/// A dead cell becomes alive with exactly 3.
#[inline]
pub fn next_state(current: CellState, live_neighbours: usize) -> CellState {
    match (current, live_neighbours) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_transitions() {
        let expected = [
            CellState::Dead,  // 0: underpopulation
            CellState::Dead,  // 1: underpopulation
            CellState::Alive, // 2
            CellState::Alive, // 3
            CellState::Dead,  // 4: overpopulation
            CellState::Dead,
            CellState::Dead,
            CellState::Dead,
            CellState::Dead,
        ];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(next_state(CellState::Alive, n), *want, "alive with {n}");
        }
    }

    #[test]
    fn dead_cell_transitions() {
        for n in 0..=8 {
            let want = if n == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(next_state(CellState::Dead, n), want, "dead with {n}");
        }
    }
}
