/// Knobs for computing a script.
///
/// The default reduces insertion/deletion pairs of equal value into moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiffOptions {
    /// Merge an insertion and a deletion of the same value into a
    /// `Change::Move`. Default: true
    pub reduce_moves: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self { reduce_moves: true }
    }
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that return the script exactly as the table produced it.
    pub fn raw() -> Self {
        Self {
            reduce_moves: false,
        }
    }

    pub fn with_reduce_moves(mut self, reduce_moves: bool) -> Self {
        self.reduce_moves = reduce_moves;
        self
    }
}
