mod trail;
pub mod types;
pub use types::*;

use crate::options::DiffOptions;
use crate::reduce::reduce_moves;
use trail::{Step, Trail};

/// Computes the changes between two strings, one `char` at a time.
///
/// Indices in the returned script are `char` offsets, not byte offsets.
pub fn changes_chars(old: &str, new: &str, options: DiffOptions) -> Script<char> {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();
    changes_with(&old_chars, &new_chars, options)
}

/// Computes the changes that turn `old` into `new`, with insertion and
/// deletion pairs of equal value reduced to moves.
///
/// # Examples
///
/// ```
/// use changes::wagner_fischer::{changes, Change};
///
/// let old = vec![1, 2, 3, 4, 5];
/// let new = vec![1, 2, 4, 5, 3];
/// assert_eq!(
///     changes(&old, &new),
///     vec![Change::Move { value: 3, origin: 2, destination: 4 }]
/// );
/// ```
pub fn changes<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Script<T> {
    changes_with(old, new, DiffOptions::default())
}

/// Computes the changes that turn `old` into `new` according to `options`.
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The new sequence
/// * `options` - Whether to reduce insertion/deletion pairs into moves
pub fn changes_with<T: PartialEq + Clone>(old: &[T], new: &[T], options: DiffOptions) -> Script<T> {
    let script = edit_script(old, new);
    if options.reduce_moves {
        reduce_moves(script)
    } else {
        script
    }
}

/// Computes a minimal script of insertions, deletions and substitutions that
/// turns `old` into `new`, using the Wagner-Fischer table.
///
/// Every cell of the table holds the script for a pair of prefixes. When
/// several candidate scripts for a cell are equally short, a deletion is
/// preferred over an insertion, and an insertion over a substitution.
///
/// # Examples
///
/// ```
/// use changes::wagner_fischer::{edit_script, Change};
///
/// let old: Vec<char> = "sitting".chars().collect();
/// let new: Vec<char> = "kitten".chars().collect();
/// assert_eq!(edit_script(&old, &new), vec![
///     Change::Substitution { value: 'k', destination: 0 },
///     Change::Substitution { value: 'e', destination: 4 },
///     Change::Deletion { value: 'g', destination: 6 },
/// ]);
/// ```
pub fn edit_script<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Script<T> {
    if old.is_empty() {
        return new
            .iter()
            .enumerate()
            .map(|(destination, e)| Change::Insertion {
                value: e.clone(),
                destination,
            })
            .collect();
    }
    if new.is_empty() {
        return old
            .iter()
            .enumerate()
            .map(|(destination, e)| Change::Deletion {
                value: e.clone(),
                destination,
            })
            .collect();
    }

    let m = old.len();
    let n = new.len();
    debug!(old_len = m, new_len = n, "building edit table");

    // Only the previous and the current column are alive at any time.
    // Column 0 deletes every prefix of `old`.
    let mut previous: Vec<Trail> = Vec::with_capacity(m + 1);
    previous.push(Trail::default());
    for row in 0..m {
        let cell = previous[row].push(Step::Delete(row));
        previous.push(cell);
    }

    // Row 0 inserts every prefix of `new`.
    let mut top = Trail::default();
    for (col, new_el) in new.iter().enumerate() {
        top = top.push(Step::Insert(col));
        let mut current: Vec<Trail> = Vec::with_capacity(m + 1);
        current.push(top.clone());

        for (row, old_el) in old.iter().enumerate() {
            let cell = if old_el == new_el {
                previous[row].clone()
            } else {
                let deletion = &current[row];
                let insertion = &previous[row + 1];
                let substitution = &previous[row];
                let shortest = deletion.len().min(insertion.len()).min(substitution.len());
                if deletion.len() == shortest {
                    deletion.push(Step::Delete(row))
                } else if insertion.len() == shortest {
                    insertion.push(Step::Insert(col))
                } else {
                    substitution.push(Step::Substitute(col))
                }
            };
            current.push(cell);
        }
        previous = current;
    }

    let script = previous[m].to_script(old, new);
    debug!(changes = script.len(), "edit table done");
    script
}
