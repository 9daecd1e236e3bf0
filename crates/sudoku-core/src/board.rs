//! The board: given clues, current values, and per-cell candidate masks.

use derive_more::{Display, Error, From};

use crate::cell::{Cell, CellSet};
use crate::digit::{Digit, DigitSet};
use crate::error::{ContradictionError, InvalidPlacement, ParseError};
use crate::house::House;

/// The three houses a cell belongs to: its row, its column, its box.
#[must_use]
pub fn houses_of_cell(cell: Cell) -> [House; 3] {
    [
        House::Row { y: cell.row() },
        House::Column { x: cell.col() },
        House::Box {
            index: cell.box_index(),
        },
    ]
}

/// A bare digit grid: which cells are given, and their current values. No candidate masks.
///
/// This is the intermediate representation produced by parsing a value string, before
/// [`CandidateGrid::initialize_candidates`] has been run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    given: [bool; 81],
    value: [Option<Digit>; 81],
}

impl DigitGrid {
    /// An empty 81-cell grid: no givens, no values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            given: [false; 81],
            value: [None; 81],
        }
    }

    /// Parses an 81-character value string: row-major, `.` or `0` for empty, `1`-`9` otherwise.
    pub fn from_values(s: &str) -> Result<Self, ParseError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 81 {
            return Err(ParseError::WrongLength {
                length: chars.len(),
            });
        }
        let mut grid = Self::new();
        for (index, &character) in chars.iter().enumerate() {
            match character {
                '.' | '0' => {}
                '1'..='9' => {
                    let digit = Digit::from_value(character.to_digit(10).unwrap() as u8);
                    grid.given[index] = true;
                    grid.value[index] = Some(digit);
                }
                _ => {
                    return Err(ParseError::InvalidCharacter {
                        character,
                        position: index,
                    });
                }
            }
        }
        Ok(grid)
    }

    /// Whether `cell` is a given clue.
    #[must_use]
    pub fn is_given(&self, cell: Cell) -> bool {
        self.given[cell.index() as usize]
    }

    /// The current value of `cell`, if filled.
    #[must_use]
    pub fn value(&self, cell: Cell) -> Option<Digit> {
        self.value[cell.index() as usize]
    }

    /// Serialises back to an 81-character value string (`.` for empty).
    #[must_use]
    pub fn to_value_string(&self) -> String {
        Cell::all()
            .map(|cell| match self.value(cell) {
                Some(digit) => char::from(b'0' + digit.value()),
                None => '.',
            })
            .collect()
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// The board: given clues, current values, and per-cell candidate masks, plus the derived
/// `cells_with_candidate` index.
///
/// `CandidateGrid` is the sole owner of this state; every mutation goes through
/// [`place`](Self::place) or [`eliminate`](Self::eliminate). There is no public API returning a
/// mutable reference to `candidates` or `cells_with_candidate` directly, so the two views of
/// "which cells can still hold which digit" can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    given: [bool; 81],
    value: [Option<Digit>; 81],
    candidates: [DigitSet; 81],
    cells_with_candidate: [CellSet; 9],
}

/// Error produced by [`CandidateGrid::apply`]: either the step's own preconditions were
/// violated, or applying it violated a board invariant.
#[derive(Debug, Display, Error, From, Clone, Copy, PartialEq, Eq)]
pub enum ApplyError {
    /// The step itself was invalid (e.g. placing onto a given cell).
    InvalidPlacement(InvalidPlacement),
    /// Applying the step left the board in a contradictory state.
    Contradiction(ContradictionError),
}

impl CandidateGrid {
    /// An empty board: no givens, no values, every cell's candidate mask is full.
    #[must_use]
    pub fn new() -> Self {
        Self {
            given: [false; 81],
            value: [None; 81],
            candidates: [DigitSet::FULL; 81],
            cells_with_candidate: [CellSet::FULL; 9],
        }
    }

    /// Parses a value string into a board with candidate masks left empty; call
    /// [`initialize_candidates`](Self::initialize_candidates) before solving.
    pub fn from_values(s: &str) -> Result<Self, ParseError> {
        let digit_grid = DigitGrid::from_values(s)?;
        Ok(Self::from_digit_grid(&digit_grid))
    }

    /// Builds a board from an already-parsed [`DigitGrid`], with empty candidate masks.
    #[must_use]
    pub fn from_digit_grid(digit_grid: &DigitGrid) -> Self {
        let mut grid = Self {
            given: [false; 81],
            value: [None; 81],
            candidates: [DigitSet::EMPTY; 81],
            cells_with_candidate: [CellSet::EMPTY; 9],
        };
        for cell in Cell::all() {
            grid.given[cell.index() as usize] = digit_grid.is_given(cell);
            grid.value[cell.index() as usize] = digit_grid.value(cell);
        }
        grid
    }

    /// Parses an ASCII candidate grid: 81 whitespace/box-separated digit runs. A single-digit
    /// run is a given clue; a multi-digit run is the pencil-mark candidate set of an empty cell.
    pub fn from_candidate_grid(s: &str) -> Result<Self, ParseError> {
        let runs: Vec<&str> = s.split_whitespace().collect();
        if runs.len() != 81 {
            return Err(ParseError::WrongCellCount { count: runs.len() });
        }
        let mut grid = Self {
            given: [false; 81],
            value: [None; 81],
            candidates: [DigitSet::EMPTY; 81],
            cells_with_candidate: [CellSet::EMPTY; 9],
        };
        for (index, run) in runs.iter().enumerate() {
            let cell = Cell::new(index as u8);
            if run.is_empty() {
                return Err(ParseError::MalformedRun {
                    cell_index: index,
                    reason: "empty run".to_owned(),
                });
            }
            let mut digits = DigitSet::EMPTY;
            let mut previous = 0u8;
            for byte in run.bytes() {
                if !byte.is_ascii_digit() || byte == b'0' {
                    return Err(ParseError::MalformedRun {
                        cell_index: index,
                        reason: format!("non-digit-1-9 byte {byte:?}"),
                    });
                }
                let value = byte - b'0';
                if value <= previous {
                    return Err(ParseError::MalformedRun {
                        cell_index: index,
                        reason: "digits not in strictly ascending order".to_owned(),
                    });
                }
                previous = value;
                digits.insert(Digit::from_value(value));
            }
            if run.len() == 1 {
                let digit = digits.first().expect("single-digit run has one digit");
                grid.given[index] = true;
                grid.value[index] = Some(digit);
            } else {
                grid.candidates[index] = digits;
                for digit in digits {
                    grid.cells_with_candidate[(digit.value() - 1) as usize].insert(cell);
                }
            }
        }
        Ok(grid)
    }

    /// Fills the candidate mask of every empty cell with the complement of the digits already
    /// placed in its row, column, and box. Idempotent: running it twice yields the same masks,
    /// since it always recomputes from `value`, never from the previous `candidates`.
    pub fn initialize_candidates(&mut self) {
        self.cells_with_candidate = [CellSet::EMPTY; 9];
        for cell in Cell::all() {
            if self.value(cell).is_some() {
                self.candidates[cell.index() as usize] = DigitSet::EMPTY;
                continue;
            }
            let mut seen = DigitSet::EMPTY;
            for house in houses_of_cell(cell) {
                for peer in house.cells() {
                    if let Some(digit) = self.value(peer) {
                        seen.insert(digit);
                    }
                }
            }
            let mask = seen.complement();
            self.candidates[cell.index() as usize] = mask;
            for digit in mask {
                self.cells_with_candidate[(digit.value() - 1) as usize].insert(cell);
            }
        }
    }

    /// Whether `cell` is a given clue.
    #[must_use]
    pub fn is_given(&self, cell: Cell) -> bool {
        self.given[cell.index() as usize]
    }

    /// The current value of `cell`, if filled.
    #[must_use]
    pub fn value(&self, cell: Cell) -> Option<Digit> {
        self.value[cell.index() as usize]
    }

    /// `cell`'s candidate mask; empty for filled cells.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.candidates[cell.index() as usize]
    }

    /// The empty cells whose candidate mask contains `digit`.
    #[must_use]
    pub fn cells_with_candidate(&self, digit: Digit) -> CellSet {
        self.cells_with_candidate[(digit.value() - 1) as usize]
    }

    /// The empty cells whose candidate mask contains `digit`, restricted to `house`.
    #[must_use]
    pub fn cells_with_candidate_in_house(&self, digit: Digit, house: House) -> CellSet {
        self.cells_with_candidate(digit) & house.cells()
    }

    /// All cells that still have no value.
    #[must_use]
    pub fn empty_cells(&self) -> CellSet {
        Cell::all().filter(|&c| self.value(c).is_none()).collect()
    }

    /// Places `digit` at `cell`: checks the placement is legal, sets the value, clears the
    /// cell's own mask, and removes `digit` from every peer's candidate mask via
    /// [`houses_of_cell`]. Does not itself check full board consistency; callers that need a
    /// verified terminal state should call [`check_consistency`](Self::check_consistency)
    /// afterward.
    pub fn place(&mut self, cell: Cell, digit: Digit) -> Result<(), InvalidPlacement> {
        if self.is_given(cell) {
            return Err(InvalidPlacement::GivenCell { cell });
        }
        if !self.candidates(cell).contains(digit) {
            return Err(InvalidPlacement::NotACandidate { cell, digit });
        }

        let old_mask = self.candidates(cell);
        for d in old_mask {
            self.cells_with_candidate[(d.value() - 1) as usize].remove(cell);
        }
        self.candidates[cell.index() as usize] = DigitSet::EMPTY;
        self.value[cell.index() as usize] = Some(digit);

        for house in houses_of_cell(cell) {
            for peer in house.cells() {
                if peer != cell && self.value(peer).is_none() {
                    let _ = self.eliminate(peer, digit);
                }
            }
        }
        Ok(())
    }

    /// Removes `digit` from `cell`'s candidate mask. Returns `Ok(true)` if the bit was present
    /// and is now cleared, `Ok(false)` if it was already absent. Returns
    /// [`ContradictionError::EmptyCandidateMask`] if the cell is unsolved and its mask is now
    /// empty — the bit is still cleared; the board is left in that terminal contradiction
    /// state rather than rolled back.
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> Result<bool, ContradictionError> {
        let was_present = self.candidates[cell.index() as usize].remove(digit);
        if was_present {
            self.cells_with_candidate[(digit.value() - 1) as usize].remove(cell);
        }
        if was_present && self.value(cell).is_none() && self.candidates(cell).is_empty() {
            return Err(ContradictionError::EmptyCandidateMask { cell });
        }
        Ok(was_present)
    }

    /// Applies a single [`Step`](crate::step::Step), stopping at (but not undoing) the first
    /// contradiction, per the atomic-per-Step policy of [`apply`](Self::apply).
    pub fn apply_step(&mut self, step: crate::step::Step) -> Result<(), ApplyError> {
        match step {
            crate::step::Step::Place { cell, digit } => {
                self.place(cell, digit)?;
                Ok(())
            }
            crate::step::Step::Eliminate { cell, digit } => {
                self.eliminate(cell, digit)?;
                Ok(())
            }
        }
    }

    /// Applies every step of `action` in order, stopping at the first contradiction. Each Step
    /// is atomic; a failing Step still fully applies its own mutation before returning.
    pub fn apply(&mut self, action: &crate::step::Action) -> Result<(), ApplyError> {
        for &step in &action.steps {
            self.apply_step(step)?;
        }
        Ok(())
    }

    /// Checks the board's consistency rules against the current state, returning the first
    /// violation found. A board with no value anywhere is trivially consistent.
    pub fn check_consistency(&self) -> Result<(), ContradictionError> {
        for cell in Cell::all() {
            if self.value(cell).is_none() && self.candidates(cell).is_empty() {
                return Err(ContradictionError::EmptyCandidateMask { cell });
            }
        }
        for cell in Cell::all() {
            if let Some(digit) = self.value(cell) {
                for house in houses_of_cell(cell) {
                    for peer in house.cells() {
                        if peer != cell && self.candidates(peer).contains(digit) {
                            return Err(ContradictionError::PeerStillCandidate {
                                cell,
                                peer,
                                digit,
                            });
                        }
                    }
                }
            }
        }
        for house in House::ALL {
            let placed: DigitSet = house
                .cells()
                .into_iter()
                .filter_map(|cell| self.value(cell))
                .collect();
            for digit in placed.complement() {
                if self.cells_with_candidate_in_house(digit, house).is_empty() {
                    return Err(ContradictionError::NoCandidateCellsInHouse { house, digit });
                }
            }
        }
        Ok(())
    }

    /// Whether every cell has a value (the puzzle is solved). Does not itself check
    /// consistency; a terminal contradiction state is neither solved nor further solvable.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Cell::all().all(|cell| self.value(cell).is_some())
    }

    /// Serialises the board back to the ASCII candidate-grid format: 81 whitespace-separated
    /// digit runs, a filled cell as a single digit, an empty cell as its ascending candidates.
    #[must_use]
    pub fn to_candidate_string(&self) -> String {
        let mut rows = Vec::with_capacity(9);
        for y in 0..9 {
            let mut cells_in_row = Vec::with_capacity(9);
            for x in 0..9 {
                let cell = Cell::from_row_col(y, x);
                let run = match self.value(cell) {
                    Some(digit) => digit.to_string(),
                    None => self
                        .candidates(cell)
                        .iter()
                        .map(|d| d.to_string())
                        .collect(),
                };
                cells_in_row.push(run);
            }
            rows.push(cells_in_row.join(" "));
        }
        rows.join("\n")
    }
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}
