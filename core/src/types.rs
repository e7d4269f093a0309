use serde::{Deserialize, Serialize};

/// Single coordinate axis, signed so neighbors of edge squares stay representable.
pub type Coord = i32;

/// Count type used for mine counts and total-square counts.
pub type SquareCount = u32;

/// Column/row position of a square on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub column: Coord,
    pub row: Coord,
}

impl Location {
    pub const fn new(column: Coord, row: Coord) -> Self {
        Self { column, row }
    }

    /// The 8 squares around this one, including those that fall off the grid.
    pub fn neighbors(self) -> NeighborIter {
        NeighborIter::new(self)
    }

    fn offset(self, (d_column, d_row): (Coord, Coord)) -> Option<Self> {
        Some(Self {
            column: self.column.checked_add(d_column)?,
            row: self.row.checked_add(d_row)?,
        })
    }
}

impl From<(Coord, Coord)> for Location {
    fn from((column, row): (Coord, Coord)) -> Self {
        Self::new(column, row)
    }
}

/// Width and height of the grid, in squares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: Coord,
    pub height: Coord,
}

impl GridSize {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub const fn contains(&self, location: Location) -> bool {
        location.column >= 0
            && location.column < self.width
            && location.row >= 0
            && location.row < self.height
    }

    pub const fn total_squares(&self) -> SquareCount {
        mult(self.width, self.height)
    }

    /// Every location on the grid, column by column.
    pub fn locations(self) -> impl Iterator<Item = Location> {
        (0..self.width)
            .flat_map(move |column| (0..self.height).map(move |row| Location { column, row }))
    }
}

pub const fn mult(a: Coord, b: Coord) -> SquareCount {
    if a <= 0 || b <= 0 {
        return 0;
    }
    let a = a as SquareCount;
    let b = b as SquareCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug)]
pub struct NeighborIter {
    center: Location,
    index: u8,
}

impl NeighborIter {
    fn new(center: Location) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Location;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            // only overflows at the very edge of the coordinate space
            if let Some(next_item) = self.center.offset(delta) {
                return Some(next_item);
            }
        }
    }
}
