// step.rs - One generation of the B3/S23 rule

use crate::grid::Grid;

/// Computes the next generation of `grid` and the live-cell count of the
/// result.
///
/// All of generation N is read from the input board while generation N+1 is
/// written into a fresh one, so every cell's rule application sees the same
/// input state. The input is left untouched.
pub fn next(grid: &Grid) -> (Grid, usize) {
    let (width, height) = (grid.width(), grid.height());
    let mut cells = vec![false; width * height];
    let mut live_count = 0;

    for row in 0..height {
        for col in 0..width {
            let neighbors = grid.count_live_neighbors(row, col);
            let alive = grid.get(row as i64, col as i64);

            let next_state = match (alive, neighbors) {
                (true, 2) | (true, 3) => true, // Survival
                (false, 3) => true,            // Birth
                _ => false,                    // Death or stays dead
            };

            if next_state {
                cells[row * width + col] = true;
                live_count += 1;
            }
        }
    }

    (Grid::from_cells(width, height, cells), live_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extinction_is_a_fixed_point() {
        let grid = Grid::new(10, 10);
        let (next_grid, live_count) = next(&grid);
        assert_eq!(live_count, 0);
        assert_eq!(next_grid, grid);
    }

    #[test]
    fn lone_cell_dies() {
        let mut grid = Grid::new(9, 9);
        grid.set(4, 4, true).unwrap();

        let (next_grid, live_count) = next(&grid);
        assert_eq!(live_count, 0);
        assert!(!next_grid.get(4, 4));
        // The input board was not mutated.
        assert!(grid.get(4, 4));
    }

    #[test]
    fn block_is_a_still_life() {
        let mut grid = Grid::new(6, 6);
        for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            grid.set(row, col, true).unwrap();
        }

        let (next_grid, live_count) = next(&grid);
        assert_eq!(live_count, 4);
        assert_eq!(next_grid, grid);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut horizontal = Grid::new(8, 8);
        for col in 2..5 {
            horizontal.set(3, col, true).unwrap();
        }

        let (vertical, live_count) = next(&horizontal);
        assert_eq!(live_count, 3);
        for row in 2..5 {
            assert!(vertical.get(row, 3));
        }
        assert!(!vertical.get(3, 2));
        assert!(!vertical.get(3, 4));

        let (back, _) = next(&vertical);
        assert_eq!(back, horizontal);
    }

    #[test]
    fn birth_crosses_the_seam() {
        // Three live cells in the last column; the wrapped rule births their
        // vertical neighbors in column 0's row as if the board were a torus.
        let mut grid = Grid::new(5, 5);
        for row in 1..4 {
            grid.set(row, 4, true).unwrap();
        }

        let (next_grid, _) = next(&grid);
        // Horizontal blinker arm reaches across the right edge into column 0.
        assert!(next_grid.get(2, 0));
        assert!(next_grid.get(2, 4));
        assert!(next_grid.get(2, 3));
    }

    #[test]
    fn live_count_matches_output_population() {
        let mut grid = Grid::new(7, 7);
        for (row, col) in [(1, 1), (1, 2), (2, 1), (4, 4), (4, 5), (5, 4), (5, 5)] {
            grid.set(row, col, true).unwrap();
        }

        let (next_grid, live_count) = next(&grid);
        assert_eq!(live_count, next_grid.population());
    }
}
