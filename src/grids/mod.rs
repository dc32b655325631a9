pub mod wall_grid;

pub use wall_grid::WallGrid;

/// logical cell coordinates, `(row, column)`
pub type Cell = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    #[inline]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.rows * self.columns
    }

    /// `None` when the slot count does not fit in a `usize`
    #[inline]
    pub fn checked_area(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }
}

/// Position of the slot holding a logical cell in the doubled grid.
#[inline]
pub fn cell_to_slot(cell: Cell) -> (usize, usize) {
    (2 * cell.0 + 1, 2 * cell.1 + 1)
}

/// Wall slot separating two cells, `None` if they do not share a wall.
pub fn wall_between(one: Cell, two: Cell) -> Option<(usize, usize)> {
    let row_gap = (one.0 as isize - two.0 as isize).abs();
    let col_gap = (one.1 as isize - two.1 as isize).abs();
    if row_gap + col_gap != 1 {
        return None;
    }

    // sum of two adjacent slots lands on the one between them
    Some((one.0 + two.0 + 1, one.1 + two.1 + 1))
}

/// Cardinal moves in iteration order. The order is relied on by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::Up,
            1 => Direction::Left,
            2 => Direction::Down,
            3 => Direction::Right,
            _ => unreachable!(),
        }
    }
}

/// In-bounds neighbors of a logical cell, walked up, left, down, right.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    origin: Cell,
    dims: Dimensions,
    counter: usize,
}

impl Neighborhood {
    pub fn new(origin: Cell, dims: Dimensions) -> Self {
        Self {
            origin,
            dims,
            counter: 0,
        }
    }
}

impl Iterator for Neighborhood {
    type Item = (Cell, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let dir = Direction::from(self.counter);
            self.counter += 1;

            let (d_row, d_col) = dir.offset();
            let row = self.origin.0 as isize + d_row;
            let col = self.origin.1 as isize + d_col;
            if row < 0 || col < 0 {
                continue;
            }

            let (row, col) = (row as usize, col as usize);
            if self.dims.contains(row, col) {
                return Some(((row, col), dir));
            }
        }

        None
    }
}

/// What a renderer should draw for one slot of the wall grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SlotKind {
    Wall,
    Open,
    Path,
}

impl From<SlotKind> for char {
    fn from(kind: SlotKind) -> Self {
        match kind {
            SlotKind::Wall => '#',
            SlotKind::Open => ' ',
            SlotKind::Path => '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(rows: usize, columns: usize) -> Dimensions {
        Dimensions { rows, columns }
    }

    #[test]
    fn neighborhood_order_is_up_left_down_right() {
        let cells: Vec<Cell> = Neighborhood::new((1, 1), dims(3, 3))
            .map(|(cell, _)| cell)
            .collect();
        assert_eq!(cells, vec![(0, 1), (1, 0), (2, 1), (1, 2)]);
    }

    #[test]
    fn neighborhood_skips_out_of_bounds() {
        let corner: Vec<_> = Neighborhood::new((0, 0), dims(2, 3)).collect();
        assert_eq!(
            corner,
            vec![((1, 0), Direction::Down), ((0, 1), Direction::Right)]
        );

        let far: Vec<_> = Neighborhood::new((1, 2), dims(2, 3)).collect();
        assert_eq!(far, vec![((0, 2), Direction::Up), ((1, 1), Direction::Left)]);

        assert_eq!(Neighborhood::new((0, 0), dims(1, 1)).count(), 0);
    }

    #[test]
    fn wall_between_adjacent_cells() {
        assert_eq!(cell_to_slot((2, 3)), (5, 7));
        assert_eq!(wall_between((0, 0), (0, 1)), Some((1, 2)));
        assert_eq!(wall_between((1, 1), (0, 1)), Some((2, 3)));
        assert_eq!(wall_between((0, 0), (1, 1)), None);
        assert_eq!(wall_between((2, 2), (2, 2)), None);
    }

    #[test]
    fn negated_direction_undoes_offset() {
        for dir in Direction::ALL.iter().copied() {
            let (a, b) = dir.offset();
            let (c, d) = (-dir).offset();
            assert_eq!((a + c, b + d), (0, 0));
        }
    }
}
