/// Write position within the attempt grid: `row` is the attempt being
/// composed, `col` the next slot to fill in that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// The attempt grid: `max_tries` rows of `word_len` slots, each slot empty
/// or holding one character.
///
/// All mutation goes through the cursor, which keeps the invariants local:
/// `row` only advances on [`commit_row`](Self::commit_row), `col` stays
/// within `0..=word_len`, and committed rows are never touched again.
#[derive(Debug, Clone)]
pub struct AttemptGrid {
    rows: Vec<Vec<Option<char>>>,
    cursor: Cursor,
}

impl AttemptGrid {
    #[must_use]
    pub fn new(max_tries: usize, word_len: usize) -> Self {
        Self {
            rows: vec![vec![None; word_len]; max_tries],
            cursor: Cursor::default(),
        }
    }

    #[must_use]
    pub fn max_tries(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn row(&self, index: usize) -> &[Option<char>] {
        &self.rows[index]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Whether the current row has all slots filled.
    #[must_use]
    pub fn is_row_full(&self) -> bool {
        self.cursor.col == self.word_len()
    }

    /// The current row assembled into a string; `None` unless the row is
    /// full.
    #[must_use]
    pub fn current_word(&self) -> Option<String> {
        if !self.is_row_full() {
            return None;
        }
        Some(self.rows[self.cursor.row].iter().flatten().collect())
    }

    /// Writes `ch` at the cursor and advances the column. Returns `false`
    /// (untouched grid) if the row is already full.
    pub fn push_char(&mut self, ch: char) -> bool {
        if self.is_row_full() {
            return false;
        }
        self.rows[self.cursor.row][self.cursor.col] = Some(ch);
        self.cursor.col += 1;
        true
    }

    /// Clears the slot before the cursor and retreats the column. Returns
    /// `false` (untouched grid) if the row is empty.
    pub fn pop_char(&mut self) -> bool {
        if self.cursor.col == 0 {
            return false;
        }
        self.cursor.col -= 1;
        self.rows[self.cursor.row][self.cursor.col] = None;
        true
    }

    /// Finalizes the current row and moves the cursor to the start of the
    /// next one. Returns the new row index.
    ///
    /// # Panics
    ///
    /// Panics if the current row is not full or all rows are already
    /// committed; the session checks both before committing.
    pub fn commit_row(&mut self) -> usize {
        assert!(self.is_row_full(), "cannot commit a partially filled row");
        assert!(
            self.cursor.row < self.max_tries(),
            "all rows already committed"
        );
        self.cursor.row += 1;
        self.cursor.col = 0;
        self.cursor.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_move_the_column() {
        let mut grid = AttemptGrid::new(6, 3);
        assert!(grid.push_char('a'));
        assert!(grid.push_char('b'));
        assert_eq!(grid.cursor(), Cursor { row: 0, col: 2 });
        assert_eq!(grid.row(0), &[Some('a'), Some('b'), None]);

        assert!(grid.pop_char());
        assert_eq!(grid.cursor(), Cursor { row: 0, col: 1 });
        assert_eq!(grid.row(0), &[Some('a'), None, None]);
    }

    #[test]
    fn push_past_the_row_end_is_rejected() {
        let mut grid = AttemptGrid::new(6, 2);
        assert!(grid.push_char('a'));
        assert!(grid.push_char('b'));
        assert!(!grid.push_char('c'));
        assert_eq!(grid.cursor(), Cursor { row: 0, col: 2 });
    }

    #[test]
    fn pop_on_an_empty_row_is_rejected() {
        let mut grid = AttemptGrid::new(6, 2);
        assert!(!grid.pop_char());
        assert_eq!(grid.cursor(), Cursor { row: 0, col: 0 });
    }

    #[test]
    fn current_word_requires_a_full_row() {
        let mut grid = AttemptGrid::new(6, 3);
        grid.push_char('l');
        grid.push_char('c');
        assert_eq!(grid.current_word(), None);
        grid.push_char('-');
        assert_eq!(grid.current_word().as_deref(), Some("lc-"));
    }

    #[test]
    fn commit_advances_to_the_next_row() {
        let mut grid = AttemptGrid::new(2, 1);
        grid.push_char('a');
        assert_eq!(grid.commit_row(), 1);
        assert_eq!(grid.cursor(), Cursor { row: 1, col: 0 });
        // The committed row is intact.
        assert_eq!(grid.row(0), &[Some('a')]);
    }

    #[test]
    #[should_panic(expected = "partially filled")]
    fn commit_of_a_partial_row_panics() {
        let mut grid = AttemptGrid::new(2, 2);
        grid.push_char('a');
        let _ = grid.commit_row();
    }
}
