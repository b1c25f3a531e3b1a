//! Reconstruction of the sorted rotation matrix from a transform string alone.
//!
//! The grid is an n×n matrix of `Option<char>`, where `None` marks a cell that has
//! not been populated yet. Reconstruction never uses the first/last-column index
//! mapping. It repeats three moves until every cell is known:
//!
//! 1. write the transform string into the (empty) rightmost column,
//! 2. rotate every row one position to the right, which moves that column to the
//!    front, so each row gains one more known leading character,
//! 3. re-sort the rows by their populated prefix.
//!
//! Before the first round the leftmost column is seeded with the sorted
//! characters of the transform string, which is exactly the first column of the
//! sorted rotation matrix. After the seed round plus `n - 2` further rounds every
//! row holds a complete rotation, in sorted order.

use std::cmp::Ordering;

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::error::{invariant, BwtError};
use crate::log_metric;
use crate::transform::comparator::SentinelComparator;
use crate::transform::rotation::shift_right;

/// A square working grid for the inverse transform.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<Option<char>>,
}

impl Grid {
    /// Creates an `n`×`n` grid with every cell empty.
    pub fn new(n: usize) -> Self {
        Self {
            cells: Array2::from_elem((n, n), None),
        }
    }

    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells[[row, col]]
    }

    pub fn is_column_empty(&self, col: usize) -> bool {
        self.cells.column(col).iter().all(Option::is_none)
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Writes `values` down column `col`, one character per row.
    ///
    /// The target column must be completely empty; writing over populated cells
    /// means the reconstruction has lost track of which columns are known.
    pub fn populate_column(&mut self, col: usize, values: &[char]) {
        invariant!(
            self.is_column_empty(col),
            "column {} must be empty before populating",
            col
        );
        invariant!(
            values.len() == self.size(),
            "column of height {} populated with {} values",
            self.size(),
            values.len()
        );

        for (cell, &value) in self.cells.column_mut(col).iter_mut().zip(values) {
            *cell = Some(value);
        }
    }

    pub fn populate_first_column(&mut self, values: &[char]) {
        self.populate_column(0, values);
    }

    pub fn populate_last_column(&mut self, values: &[char]) {
        match self.size() {
            0 => invariant!(
                values.is_empty(),
                "column of height 0 populated with {} values",
                values.len()
            ),
            n => self.populate_column(n - 1, values),
        }
    }

    /// Right-cyclic-shifts every row by one position.
    pub fn shift_rows_right(&mut self) {
        for mut row in self.cells.rows_mut() {
            let mut shifted = row.to_vec();
            shift_right(&mut shifted);
            row.assign(&Array1::from(shifted));
        }
    }

    /// Stable-sorts the rows by their populated prefix under `comparator`.
    pub fn sort_rows(&mut self, comparator: &SentinelComparator) {
        let mut order: Vec<usize> = (0..self.size()).collect();
        order.sort_by(|&a, &b| {
            compare_prefixes(comparator, self.cells.row(a), self.cells.row(b))
        });
        self.cells = self.cells.select(Axis(0), &order);
    }

    /// One reconstruction round: rotate the rows, then restore sorted order.
    pub fn shift_and_sort(&mut self, comparator: &SentinelComparator) {
        self.shift_rows_right();
        self.sort_rows(comparator);
    }

    /// Each row as a string, cut at the first empty cell.
    pub fn rows(&self) -> Vec<String> {
        self.cells.rows().into_iter().map(row_prefix).collect()
    }

    pub fn last_column(&self) -> String {
        match self.size() {
            0 => String::new(),
            n => self.cells.column(n - 1).iter().map_while(|cell| *cell).collect(),
        }
    }
}

fn row_prefix(row: ArrayView1<'_, Option<char>>) -> String {
    row.iter().map_while(|cell| *cell).collect()
}

fn compare_prefixes(
    comparator: &SentinelComparator,
    a: ArrayView1<'_, Option<char>>,
    b: ArrayView1<'_, Option<char>>,
) -> Ordering {
    comparator.compare_seq(
        a.iter().map_while(|cell| *cell),
        b.iter().map_while(|cell| *cell),
    )
}

/// Rebuilds the sorted rotation matrix for the transform string `encoded`.
///
/// `encoded` must be non-empty; the caller validates that. A string that no
/// forward transform could have produced shows up as a last column that differs
/// from `encoded` and is reported as `CorruptInput`.
pub fn reconstruct(encoded: &[char], comparator: &SentinelComparator) -> Result<Grid, BwtError> {
    let n = encoded.len();
    let mut grid = Grid::new(n);

    initial_setup(&mut grid, encoded, comparator);

    let remaining_rounds = n.saturating_sub(2);
    for round in 0..remaining_rounds {
        grid.populate_last_column(encoded);
        grid.shift_and_sort(comparator);
        log::trace!("grid reconstruction round {}/{} done", round + 1, remaining_rounds);
    }

    log_metric!("event" = "grid_reconstruct", "size" = n, "rounds" = remaining_rounds + 1);

    invariant!(
        grid.is_complete(),
        "grid of size {} still has empty cells after reconstruction",
        n
    );
    if !grid.last_column().chars().eq(encoded.iter().copied()) {
        return Err(BwtError::CorruptInput(format!(
            "reconstructed last column {:?} does not match the encoded input; \
             it was not produced by a forward transform",
            grid.last_column()
        )));
    }

    Ok(grid)
}

fn initial_setup(grid: &mut Grid, encoded: &[char], comparator: &SentinelComparator) {
    grid.populate_last_column(encoded);
    // With a single column the first column is the last one, already holding
    // the only character.
    if grid.size() > 1 {
        grid.populate_first_column(&comparator.sort_chars(encoded));
    }
    grid.shift_and_sort(comparator);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEL: char = '\u{7}';

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn cmp() -> SentinelComparator {
        SentinelComparator::new(BEL)
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3);
        assert_eq!(grid.size(), 3);
        assert!((0..3).all(|c| grid.is_column_empty(c)));
        assert!(!grid.is_complete());
        assert_eq!(grid.rows(), vec!["", "", ""]);
    }

    #[test]
    #[should_panic(expected = "must be empty before populating")]
    fn test_populating_a_filled_column_is_fatal() {
        let mut grid = Grid::new(2);
        grid.populate_last_column(&chars("ab"));
        grid.populate_last_column(&chars("cd"));
    }

    #[test]
    fn test_initial_setup_yields_sorted_two_character_prefixes() {
        let encoded = chars("ANNB\u{7}AA");
        let mut grid = Grid::new(encoded.len());
        initial_setup(&mut grid, &encoded, &cmp());

        assert_eq!(
            grid.rows(),
            vec!["\u{7}B", "A\u{7}", "AN", "AN", "BA", "NA", "NA"]
        );
        assert!(grid.is_column_empty(encoded.len() - 1));
    }

    #[test]
    fn test_shift_rows_right_moves_last_column_to_front() {
        let mut grid = Grid::new(3);
        grid.populate_first_column(&chars("abc"));
        grid.populate_last_column(&chars("xyz"));
        grid.shift_rows_right();

        assert_eq!(grid.rows(), vec!["xa", "yb", "zc"]);
        assert_eq!(grid.cell(0, 0), Some('x'));
        assert_eq!(grid.cell(2, 1), Some('c'));
        assert!(grid.is_column_empty(2));
    }

    #[test]
    fn test_rows_are_cut_at_first_empty_cell() {
        let mut grid = Grid::new(3);
        grid.populate_last_column(&chars("xyz"));
        // First cell of every row is empty, so every prefix is empty.
        assert_eq!(grid.rows(), vec!["", "", ""]);
    }

    #[test]
    fn test_reconstruct_banana() {
        let encoded = chars("ANNB\u{7}AA");
        let grid = reconstruct(&encoded, &cmp()).unwrap();

        assert!(grid.is_complete());
        assert_eq!(grid.last_column(), "ANNB\u{7}AA");
        assert_eq!(
            grid.rows(),
            vec![
                "\u{7}BANANA",
                "A\u{7}BANAN",
                "ANA\u{7}BAN",
                "ANANA\u{7}B",
                "BANANA\u{7}",
                "NA\u{7}BANA",
                "NANA\u{7}BA",
            ]
        );
    }

    #[test]
    fn test_reconstruct_single_and_pair() {
        let single = reconstruct(&chars("\u{7}"), &cmp()).unwrap();
        assert_eq!(single.rows(), vec!["\u{7}"]);

        let pair = reconstruct(&chars("A\u{7}"), &cmp()).unwrap();
        assert_eq!(pair.rows(), vec!["\u{7}A", "A\u{7}"]);
    }

    #[test]
    fn test_sort_rows_is_idempotent() {
        let mut grid = reconstruct(&chars("ANNB\u{7}AA"), &cmp()).unwrap();
        let before = grid.rows();
        grid.sort_rows(&cmp());
        assert_eq!(grid.rows(), before);
    }

    #[test]
    fn test_reconstruct_reports_inconsistent_last_column() {
        let result = reconstruct(&chars("a\u{7}a"), &cmp());
        assert!(matches!(result, Err(BwtError::CorruptInput(_))));
    }

    #[test]
    fn test_zero_sized_grid() {
        let mut grid = Grid::new(0);
        grid.populate_last_column(&[]);
        grid.sort_rows(&cmp());
        assert!(grid.is_complete());
        assert_eq!(grid.last_column(), "");
        assert!(grid.rows().is_empty());
    }

    #[test]
    #[should_panic(expected = "column of height 0")]
    fn test_zero_sized_grid_rejects_values() {
        let mut grid = Grid::new(0);
        grid.populate_last_column(&chars("a"));
    }

    #[test]
    fn test_sort_rows_orders_by_populated_prefix() {
        let mut grid = Grid::new(3);
        grid.populate_first_column(&chars("ba\u{7}"));
        grid.sort_rows(&cmp());
        assert_eq!(grid.rows(), vec!["\u{7}", "a", "b"]);
        assert_eq!(grid.cell(2, 0), Some('b'));
    }
}
