use crate::options::DiffOptions;
use crate::wagner_fischer::{changes_chars, changes_with, Script};

/// Changes of a value since an older value of the same type.
///
/// The receiver is the new value and the argument the old one:
/// `new.changes_since(&old)`.
///
/// Implemented for slices (and so for `Vec<T>`) and for `str`, which is
/// compared one `char` at a time.
pub trait ChangesSince {
    type Item;

    /// Changes since `old`, with insertion/deletion pairs reduced to moves.
    fn changes_since(&self, old: &Self) -> Script<Self::Item> {
        self.changes_since_with(old, DiffOptions::default())
    }

    fn changes_since_with(&self, old: &Self, options: DiffOptions) -> Script<Self::Item>;
}

impl<T: PartialEq + Clone> ChangesSince for [T] {
    type Item = T;

    fn changes_since_with(&self, old: &Self, options: DiffOptions) -> Script<T> {
        changes_with(old, self, options)
    }
}

impl ChangesSince for str {
    type Item = char;

    fn changes_since_with(&self, old: &Self, options: DiffOptions) -> Script<char> {
        changes_chars(old, self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wagner_fischer::Change;

    #[test]
    fn test_receiver_is_new_value() {
        assert_eq!(
            "abcd".changes_since(""),
            vec![
                Change::Insertion { value: 'a', destination: 0 },
                Change::Insertion { value: 'b', destination: 1 },
                Change::Insertion { value: 'c', destination: 2 },
                Change::Insertion { value: 'd', destination: 3 },
            ]
        );
        assert_eq!(
            "".changes_since("ab"),
            vec![
                Change::Deletion { value: 'a', destination: 0 },
                Change::Deletion { value: 'b', destination: 1 },
            ]
        );
    }

    #[test]
    fn test_vec_through_slice() {
        let old = vec![1, 2, 3, 4, 5];
        let new = vec![1, 2, 4, 5, 3];
        assert_eq!(
            new.changes_since(&old),
            vec![Change::Move { value: 3, origin: 2, destination: 4 }]
        );
        assert_eq!(
            new.changes_since_with(&old, DiffOptions::raw()),
            vec![
                Change::Deletion { value: 3, destination: 2 },
                Change::Insertion { value: 3, destination: 4 },
            ]
        );
    }

    #[test]
    fn test_strings() {
        assert!("".changes_since("").is_empty());
        assert_eq!(
            String::from("kitten").changes_since("sitting"),
            vec![
                Change::Substitution { value: 'k', destination: 0 },
                Change::Substitution { value: 'e', destination: 4 },
                Change::Deletion { value: 'g', destination: 6 },
            ]
        );
    }
}
