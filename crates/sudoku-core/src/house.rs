//! The 27 houses (9 rows, 9 columns, 9 boxes) that constrain digit placement.

use std::sync::OnceLock;

use crate::cell::CellSet;

/// A row, column, or 3x3 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// Row `y`, `0..9`.
    Row { y: u8 },
    /// Column `x`, `0..9`.
    Column { x: u8 },
    /// Box `index`, `0..9`, numbered left-to-right, top-to-bottom.
    Box { index: u8 },
}

impl House {
    /// All 27 houses: the 9 rows, then the 9 columns, then the 9 boxes.
    pub const ALL: [Self; 27] = {
        let mut houses = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            houses[i] = Self::Row { y: i as u8 };
            houses[9 + i] = Self::Column { x: i as u8 };
            houses[18 + i] = Self::Box { index: i as u8 };
            i += 1;
        }
        houses
    };

    /// The 9 cells belonging to this house.
    #[must_use]
    pub fn cells(self) -> CellSet {
        static ROWS: OnceLock<[CellSet; 9]> = OnceLock::new();
        static COLUMNS: OnceLock<[CellSet; 9]> = OnceLock::new();
        static BOXES: OnceLock<[CellSet; 9]> = OnceLock::new();

        match self {
            Self::Row { y } => {
                ROWS.get_or_init(|| std::array::from_fn(|i| CellSet::row(i as u8)))[y as usize]
            }
            Self::Column { x } => {
                COLUMNS.get_or_init(|| std::array::from_fn(|i| CellSet::column(i as u8)))
                    [x as usize]
            }
            Self::Box { index } => {
                BOXES.get_or_init(|| std::array::from_fn(|i| CellSet::box_(i as u8)))
                    [index as usize]
            }
        }
    }

    /// Whether this house is a box (as opposed to a row or column "line").
    #[must_use]
    pub const fn is_box(self) -> bool {
        matches!(self, Self::Box { .. })
    }

    /// Whether this house is a row or column ("line", as opposed to a box).
    #[must_use]
    pub const fn is_line(self) -> bool {
        !self.is_box()
    }

    /// A short human-readable name used in explanation strings: `r3`, `c7`, `b5` (1-based).
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Row { y } => format!("r{}", y + 1),
            Self::Column { x } => format!("c{}", x + 1),
            Self::Box { index } => format!("b{}", index + 1),
        }
    }
}

impl std::fmt::Display for House {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
