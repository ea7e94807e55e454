//! Board module - the 3x3 sliding grid plus one external holding slot
//!
//! The board is a fixed-topology graph of 10 cells: 9 grid cells addressed
//! by (row, col) and one external slot adjacent only to grid cell (2,2).
//! The external slot is addressed through the public API as (3, 2).
//! At rest all 9 tiles are placed and exactly one of the 10 cells is empty.

use arrayvec::ArrayVec;

use crate::types::{
    Cell, Direction, MoveResult, EXTERNAL_COL, EXTERNAL_ROW, GRID_SIZE, TILE_COUNT,
};

/// Solved arrangement: tiles 0..8 in row-major order, external slot empty
const SOLVED: [[Cell; GRID_SIZE]; GRID_SIZE] = [
    [Some(0), Some(1), Some(2)],
    [Some(3), Some(4), Some(5)],
    [Some(6), Some(7), Some(8)],
];

/// Read-only copy of the board state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    pub external: Cell,
}

/// The puzzle board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    external: Cell,
}

impl Board {
    /// Create a new board in the solved arrangement
    pub fn new() -> Self {
        Self {
            grid: SOLVED,
            external: None,
        }
    }

    /// Reset to the solved arrangement with an empty external slot
    pub fn reset(&mut self) {
        self.grid = SOLVED;
        self.external = None;
    }

    /// Scramble the board for play.
    ///
    /// This is a scripted scramble, not a random one: it always parks tile 8
    /// in the external slot, leaving grid (2,2) empty. Any replacement
    /// scramble must keep the same invariant: the result is never already
    /// solved and is always solvable (here, exactly one move away).
    pub fn shuffle(&mut self) {
        self.grid = [
            [Some(0), Some(1), Some(2)],
            [Some(3), Some(4), Some(5)],
            [Some(6), Some(7), None],
        ];
        self.external = Some(8);
    }

    /// Get the cell at grid position (row, col), None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(self.grid[row][col])
        } else {
            None
        }
    }

    /// Tile currently parked in the external slot, if any
    pub fn external(&self) -> Cell {
        self.external
    }

    /// Read-only snapshot of the full board state
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid: self.grid,
            external: self.external,
        }
    }

    /// True iff the grid is in the solved arrangement and the external slot
    /// is empty.
    pub fn is_win(&self) -> bool {
        self.grid == SOLVED && self.external.is_none()
    }

    /// Request to move the tile at (row, col) one step in `direction`.
    ///
    /// Row 3 addresses the external slot (col must be 2). Requests that
    /// match no legal case, including out-of-range coordinates and empty
    /// source cells, are silent no-ops with `moved: false`.
    pub fn apply_move(&mut self, row: usize, col: usize, direction: Direction) -> MoveResult {
        // Case A: park grid (2,2)'s tile in the external slot.
        if row == GRID_SIZE - 1
            && col == GRID_SIZE - 1
            && direction == Direction::Down
            && self.external.is_none()
        {
            if let Some(tile) = self.grid[GRID_SIZE - 1][GRID_SIZE - 1] {
                self.grid[GRID_SIZE - 1][GRID_SIZE - 1] = None;
                self.external = Some(tile);
                return self.moved();
            }
            return MoveResult::no_op();
        }

        // Case B: return the external slot's tile to grid (2,2).
        if row == EXTERNAL_ROW && col == EXTERNAL_COL {
            if let Some(tile) = self.external {
                if direction == Direction::Up && self.grid[GRID_SIZE - 1][GRID_SIZE - 1].is_none()
                {
                    self.grid[GRID_SIZE - 1][GRID_SIZE - 1] = Some(tile);
                    self.external = None;
                    return self.moved();
                }
            }
            return MoveResult::no_op();
        }

        // Case C: step within the 3x3 grid into an empty neighbor.
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return MoveResult::no_op();
        }
        let Some(tile) = self.grid[row][col] else {
            return MoveResult::no_op();
        };
        let (dr, dc) = direction.delta();
        let target_row = row as i8 + dr;
        let target_col = col as i8 + dc;
        if target_row < 0
            || target_row >= GRID_SIZE as i8
            || target_col < 0
            || target_col >= GRID_SIZE as i8
        {
            return MoveResult::no_op();
        }
        let (target_row, target_col) = (target_row as usize, target_col as usize);
        if self.grid[target_row][target_col].is_some() {
            return MoveResult::no_op();
        }
        self.grid[target_row][target_col] = Some(tile);
        self.grid[row][col] = None;
        self.moved()
    }

    fn moved(&self) -> MoveResult {
        debug_assert!(self.is_consistent(), "board invariant broken after move");
        MoveResult {
            moved: true,
            is_win: self.is_win(),
        }
    }

    /// True iff the tile at (row, col) has somewhere to go.
    ///
    /// For a grid cell: any of the 4 grid neighbors is empty, or, for (2,2),
    /// the external slot is empty. For the external slot itself (row 3):
    /// it holds a tile and grid (2,2) is empty. Pure query, no side effects.
    pub fn can_move(&self, row: usize, col: usize) -> bool {
        if row == EXTERNAL_ROW && col == EXTERNAL_COL {
            return self.external.is_some()
                && self.grid[GRID_SIZE - 1][GRID_SIZE - 1].is_none();
        }
        if row >= GRID_SIZE || col >= GRID_SIZE || self.grid[row][col].is_none() {
            return false;
        }
        let neighbor_empty = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .iter()
        .any(|dir| {
            let (dr, dc) = dir.delta();
            let r = row as i8 + dr;
            let c = col as i8 + dc;
            r >= 0
                && r < GRID_SIZE as i8
                && c >= 0
                && c < GRID_SIZE as i8
                && self.grid[r as usize][c as usize].is_none()
        });
        if neighbor_empty {
            return true;
        }
        row == GRID_SIZE - 1 && col == GRID_SIZE - 1 && self.external.is_none()
    }

    /// All cells whose tile can currently move, external slot included.
    /// Bounded by the 10 board cells, so no allocation.
    pub fn movable_cells(&self) -> ArrayVec<(usize, usize), 10> {
        let mut cells = ArrayVec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.can_move(row, col) {
                    cells.push((row, col));
                }
            }
        }
        if self.can_move(EXTERNAL_ROW, EXTERNAL_COL) {
            cells.push((EXTERNAL_ROW, EXTERNAL_COL));
        }
        cells
    }

    /// Structural invariant: each tile id 0..8 placed exactly once across the
    /// 10 cells, and exactly one cell empty.
    pub fn is_consistent(&self) -> bool {
        let mut seen = [false; TILE_COUNT];
        let mut placed = 0usize;
        let mut check = |cell: Cell| match cell {
            Some(tile) if (tile as usize) < TILE_COUNT && !seen[tile as usize] => {
                seen[tile as usize] = true;
                placed += 1;
                true
            }
            Some(_) => false,
            None => true,
        };
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if !check(self.grid[row][col]) {
                    return false;
                }
            }
        }
        if !check(self.external) {
            return false;
        }
        placed == TILE_COUNT
    }

    /// Build a board from explicit cells, for tests
    #[cfg(test)]
    pub fn from_cells(grid: [[Cell; GRID_SIZE]; GRID_SIZE], external: Cell) -> Self {
        Self { grid, external }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience for tests and fixtures: tile ids as a 2D array of options
#[cfg(test)]
pub fn tiles(rows: [[i8; GRID_SIZE]; GRID_SIZE]) -> [[Cell; GRID_SIZE]; GRID_SIZE] {
    let mut grid = [[None; GRID_SIZE]; GRID_SIZE];
    for (r, row) in rows.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            grid[r][c] = if v < 0 { None } else { Some(v as u8) };
        }
    }
    grid
}
