/// A single cell of the grid.
///
/// `age` counts the consecutive generations the cell has been alive: it is
/// always 0 while the cell is dead, set to 1 on birth and incremented each
/// generation the cell survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Column of the cell, in `[0, cols)`
    pub x: usize,
    /// Row of the cell, in `[0, rows)`
    pub y: usize,
    /// Whether the cell is currently alive
    pub alive: bool,
    /// Consecutive generations alive; 0 whenever `alive` is false
    pub age: u32,
}

impl Cell {
    /// A dead cell at the given coordinates.
    pub fn dead(x: usize, y: usize) -> Self {
        Cell {
            x,
            y,
            alive: false,
            age: 0,
        }
    }

    /// A freshly born cell at the given coordinates (`age == 1`).
    pub fn born(x: usize, y: usize) -> Self {
        Cell {
            x,
            y,
            alive: true,
            age: 1,
        }
    }

    /// The same cell one surviving generation older.
    pub fn survived(&self) -> Self {
        Cell {
            age: self.age + 1,
            ..*self
        }
    }
}
