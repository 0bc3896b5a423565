//! Bookkeeping of the `t`-wise value combinations a run has to cover.
//!
//! Every `t`-subset of columns is a [`ColumnSet`]. Its value combinations
//! are numbered in mixed radix (first column most significant) and each
//! number owns one [`TupleState`] slot.

/// Coverage state of one value combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TupleState {
    /// Rejected by the filter on its own; nothing to cover.
    Excluded,
    Uncovered,
    Covered,
    /// Accepted on its own but no valid full row contains it.
    Uncoverable,
}

#[derive(Debug, Clone)]
pub(crate) struct ColumnSet {
    pub(crate) columns: Vec<usize>,
    radices: Vec<usize>,
    states: Vec<TupleState>,
}

impl ColumnSet {
    fn new(columns: Vec<usize>, sizes: &[usize]) -> Self {
        let radices: Vec<usize> = columns.iter().map(|&c| sizes[c]).collect();
        let slots = radices.iter().product();
        Self {
            columns,
            radices,
            states: vec![TupleState::Uncovered; slots],
        }
    }

    fn decode(&self, mut code: usize) -> Vec<usize> {
        let mut values = vec![0; self.radices.len()];
        for (slot, &radix) in values.iter_mut().zip(&self.radices).rev() {
            *slot = code % radix;
            code /= radix;
        }
        values
    }

    /// Code of the combination `row` holds on this set's columns, or `None`
    /// if one of them is unassigned.
    fn encode(&self, row: &[Option<usize>]) -> Option<usize> {
        let mut code = 0;
        for (&column, &radix) in self.columns.iter().zip(&self.radices) {
            code = code * radix + row[column]?;
        }
        Some(code)
    }
}

/// Lexicographic `t`-subsets of `0..width`.
pub(crate) fn column_sets(width: usize, t: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if t == 0 || t > width {
        return out;
    }
    let mut combo: Vec<usize> = (0..t).collect();
    loop {
        out.push(combo.clone());
        let Some(i) = (0..t).rev().find(|&i| combo[i] != i + width - t) else {
            return out;
        };
        combo[i] += 1;
        for j in i + 1..t {
            combo[j] = combo[j - 1] + 1;
        }
    }
}

/// States of every combination of every column set.
#[derive(Debug, Clone)]
pub(crate) struct TupleTable {
    width: usize,
    sets: Vec<ColumnSet>,
    /// Set indices per column.
    by_column: Vec<Vec<usize>>,
    /// Everything before `(set, code)` is known not to be uncovered.
    cursor: (usize, usize),
}

impl TupleTable {
    /// Builds the table for columns of the given `sizes`, classifying each
    /// combination with `accepts` on a row holding only that combination.
    pub(crate) fn build<F>(sizes: &[usize], t: usize, accepts: F) -> Self
    where
        F: Fn(&[Option<usize>]) -> bool,
    {
        let width = sizes.len();
        let mut sets: Vec<ColumnSet> = column_sets(width, t)
            .into_iter()
            .map(|columns| ColumnSet::new(columns, sizes))
            .collect();

        let mut by_column = vec![Vec::new(); width];
        let mut sparse = vec![None; width];
        for (s, set) in sets.iter_mut().enumerate() {
            for &c in &set.columns {
                by_column[c].push(s);
            }
            for code in 0..set.states.len() {
                for (&c, v) in set.columns.iter().zip(set.decode(code)) {
                    sparse[c] = Some(v);
                }
                if !accepts(&sparse) {
                    set.states[code] = TupleState::Excluded;
                }
            }
            for &c in &set.columns {
                sparse[c] = None;
            }
        }

        Self {
            width,
            sets,
            by_column,
            cursor: (0, 0),
        }
    }

    pub(crate) fn count(&self, state: TupleState) -> usize {
        self.sets
            .iter()
            .map(|s| s.states.iter().filter(|&&st| st == state).count())
            .sum()
    }

    /// First uncovered combination in set order.
    pub(crate) fn next_uncovered(&mut self) -> Option<(usize, usize)> {
        let (mut s, mut code) = self.cursor;
        while s < self.sets.len() {
            let states = &self.sets[s].states;
            if let Some(offset) = states[code..]
                .iter()
                .position(|&st| st == TupleState::Uncovered)
            {
                self.cursor = (s, code + offset);
                return Some(self.cursor);
            }
            s += 1;
            code = 0;
        }
        self.cursor = (s, 0);
        None
    }

    pub(crate) fn mark(&mut self, set: usize, code: usize, state: TupleState) {
        self.sets[set].states[code] = state;
    }

    /// A row holding only the combination `code` of `set`.
    pub(crate) fn seed_row(&self, set: usize, code: usize) -> Vec<Option<usize>> {
        let set = &self.sets[set];
        let mut row = vec![None; self.width];
        for (&c, v) in set.columns.iter().zip(set.decode(code)) {
            row[c] = Some(v);
        }
        row
    }

    /// `(column, value index)` pairs of one combination.
    pub(crate) fn cells(&self, set: usize, code: usize) -> Vec<(usize, usize)> {
        let set = &self.sets[set];
        set.columns.iter().copied().zip(set.decode(code)).collect()
    }

    /// Number of uncovered combinations that assigning `value` to `column`
    /// would complete, counting only sets whose other columns are already
    /// assigned in `row`.
    pub(crate) fn gain(&self, row: &[Option<usize>], column: usize, value: usize) -> usize {
        let mut gain = 0;
        for &s in &self.by_column[column] {
            let set = &self.sets[s];
            let mut code = 0;
            let mut complete = true;
            for (&c, &radix) in set.columns.iter().zip(&set.radices) {
                let v = if c == column { Some(value) } else { row[c] };
                match v {
                    Some(v) => code = code * radix + v,
                    None => {
                        complete = false;
                        break;
                    }
                }
            }
            if complete && set.states[code] == TupleState::Uncovered {
                gain += 1;
            }
        }
        gain
    }

    /// Marks every uncovered combination contained in a full row as covered.
    pub(crate) fn cover_row(&mut self, row: &[Option<usize>]) -> usize {
        let mut newly = 0;
        for set in &mut self.sets {
            if let Some(code) = set.encode(row) {
                if set.states[code] == TupleState::Uncovered {
                    set.states[code] = TupleState::Covered;
                    newly += 1;
                }
            }
        }
        newly
    }
}
