use std::collections::HashMap;
use std::hash::Hash;

/// A two-level lookup table keyed by row then column. Transition tables are stored as
/// `state -> symbol -> destination(s)`.
#[derive(Clone, Debug)]
pub struct Table<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    map: HashMap<R, HashMap<C, V>>,
}

impl<R, C, V> Table<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    /// Create an empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Set the value for the given keys, returning the value previously stored there.
    #[inline]
    pub fn set(&mut self, row: R, col: C, val: V) -> Option<V> {
        self.map.entry(row).or_default().insert(col, val)
    }

    /// Retrieve a mutable reference to the value for the given keys, inserting the result of
    /// `default` first if the cell is empty.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, row: R, col: C, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.map
            .entry(row)
            .or_default()
            .entry(col)
            .or_insert_with(default)
    }

    #[inline]
    pub fn get(&self, row: &R, col: &C) -> Option<&V> {
        self.map.get(row).and_then(|cols| cols.get(col))
    }

    /// Retrieve every column and value stored in a row. Missing rows are empty.
    #[inline]
    pub fn get_row(&self, row: &R) -> HashMap<&C, &V> {
        match self.map.get(row) {
            Some(cols) => cols.iter().collect(),
            None => HashMap::new(),
        }
    }

    /// Iterate over every `(row, col, value)` cell in the table, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&R, &C, &V)> + '_ {
        self.map
            .iter()
            .flat_map(|(row, cols)| cols.iter().map(move |(col, val)| (row, col, val)))
    }

    /// The number of occupied cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.values().map(HashMap::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R, C, V> Default for Table<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
