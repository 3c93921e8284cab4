use crate::error::{ChangesError, Result, Side};
use std::fmt;

/// Alias for a vector of Change
/// Result of the Wagner-Fischer `changes` functions
pub type Script<T> = Vec<Change<T>>;

/// Each element in a script can be
/// added (Insertion)
/// removed (Deletion)
/// overwritten (Substitution)
/// relocated (Move)
///
/// `destination` of an `Insertion`, a `Substitution` and a `Move` is an index
/// into the new sequence. `destination` of a `Deletion` and `origin` of a
/// `Move` are indices into the old sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Change<T> {
    Insertion { value: T, destination: usize },
    Deletion { value: T, destination: usize },
    /// `value` is the new element that overwrote the one at `destination`.
    Substitution { value: T, destination: usize },
    Move { value: T, origin: usize, destination: usize },
}

impl<T> Change<T> {
    pub fn value(&self) -> &T {
        match self {
            Change::Insertion { value, .. }
            | Change::Deletion { value, .. }
            | Change::Substitution { value, .. }
            | Change::Move { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Change::Insertion { value, .. }
            | Change::Deletion { value, .. }
            | Change::Substitution { value, .. }
            | Change::Move { value, .. } => value,
        }
    }

    pub fn destination(&self) -> usize {
        match self {
            Change::Insertion { destination, .. }
            | Change::Deletion { destination, .. }
            | Change::Substitution { destination, .. }
            | Change::Move { destination, .. } => *destination,
        }
    }

    /// Old-sequence index of a `Move`, `None` for every other variant.
    pub fn origin(&self) -> Option<usize> {
        match self {
            Change::Move { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    pub fn is_insertion(&self) -> bool {
        matches!(self, Change::Insertion { .. })
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self, Change::Deletion { .. })
    }

    pub fn is_substitution(&self) -> bool {
        matches!(self, Change::Substitution { .. })
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Change::Move { .. })
    }

    /// Transforms the carried value, keeping the variant and its indices.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Change<U> {
        match self {
            Change::Insertion { value, destination } => Change::Insertion {
                value: f(value),
                destination,
            },
            Change::Deletion { value, destination } => Change::Deletion {
                value: f(value),
                destination,
            },
            Change::Substitution { value, destination } => Change::Substitution {
                value: f(value),
                destination,
            },
            Change::Move {
                value,
                origin,
                destination,
            } => Change::Move {
                value: f(value),
                origin,
                destination,
            },
        }
    }

    /// Checks that every index of this change points inside the sequence it
    /// refers to, given the lengths of the old and the new sequence.
    pub fn check_bounds(&self, old_len: usize, new_len: usize) -> Result<()> {
        match self {
            Change::Deletion { destination, .. } => {
                in_range(*destination, old_len, Side::Old)
            }
            Change::Insertion { destination, .. } | Change::Substitution { destination, .. } => {
                in_range(*destination, new_len, Side::New)
            }
            Change::Move {
                origin,
                destination,
                ..
            } => {
                if *origin >= old_len {
                    return Err(ChangesError::OriginOutOfRange {
                        origin: *origin,
                        len: old_len,
                    });
                }
                in_range(*destination, new_len, Side::New)
            }
        }
    }
}

fn in_range(destination: usize, len: usize, sequence: Side) -> Result<()> {
    if destination < len {
        Ok(())
    } else {
        Err(ChangesError::DestinationOutOfRange {
            destination,
            len,
            sequence,
        })
    }
}

/// Checks every change of `script` with [`Change::check_bounds`], stopping at
/// the first one that does not fit.
pub fn check_script<T>(script: &[Change<T>], old_len: usize, new_len: usize) -> Result<()> {
    script
        .iter()
        .try_for_each(|change| change.check_bounds(old_len, new_len))
}

impl<T: fmt::Display> fmt::Display for Change<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Insertion { value, destination } => {
                write!(f, "Inserted {} at index {}", value, destination)
            }
            Change::Deletion { value, destination } => {
                write!(f, "Deleted {} at index {}", value, destination)
            }
            Change::Substitution { value, destination } => {
                write!(f, "Substituted with {} at index {}", value, destination)
            }
            Change::Move {
                value,
                origin,
                destination,
            } => write!(f, "Moved {} from index {} to {}", value, origin, destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_kinds(value: i32) -> Vec<Change<i32>> {
        vec![
            Change::Insertion {
                value,
                destination: 0,
            },
            Change::Deletion {
                value,
                destination: 0,
            },
            Change::Substitution {
                value,
                destination: 0,
            },
            Change::Move {
                value,
                origin: 0,
                destination: 0,
            },
        ]
    }

    #[test]
    fn test_equal_to_itself() {
        for change in all_kinds(1) {
            assert_eq!(change, change.clone());
        }
    }

    #[test]
    fn test_never_equal_across_variants() {
        let kinds = all_kinds(1);
        for (i, a) in kinds.iter().enumerate() {
            for (j, b) in kinds.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_fields_take_part_in_equality() {
        let insertion = Change::Insertion {
            value: 1,
            destination: 0,
        };
        assert_ne!(
            insertion,
            Change::Insertion {
                value: 0,
                destination: 0
            }
        );
        assert_ne!(
            insertion,
            Change::Insertion {
                value: 1,
                destination: 1
            }
        );

        let moved = Change::Move {
            value: 1,
            origin: 0,
            destination: 0,
        };
        assert_ne!(
            moved,
            Change::Move {
                value: 1,
                origin: 1,
                destination: 0
            }
        );
        assert_ne!(
            moved,
            Change::Move {
                value: 1,
                origin: 0,
                destination: 1
            }
        );
        assert_ne!(
            moved,
            Change::Move {
                value: 0,
                origin: 0,
                destination: 0
            }
        );
    }

    #[test]
    fn test_display() {
        let inserted = Change::Insertion {
            value: 'a',
            destination: 3,
        };
        let deleted = Change::Deletion {
            value: 'b',
            destination: 0,
        };
        let substituted = Change::Substitution {
            value: 'C',
            destination: 2,
        };
        let moved = Change::Move {
            value: 7,
            origin: 2,
            destination: 4,
        };
        assert_eq!(inserted.to_string(), "Inserted a at index 3");
        assert_eq!(deleted.to_string(), "Deleted b at index 0");
        assert_eq!(substituted.to_string(), "Substituted with C at index 2");
        assert_eq!(moved.to_string(), "Moved 7 from index 2 to 4");
    }

    #[test]
    fn test_accessors() {
        let moved = Change::Move {
            value: "x",
            origin: 5,
            destination: 1,
        };
        assert_eq!(*moved.value(), "x");
        assert_eq!(moved.origin(), Some(5));
        assert_eq!(moved.destination(), 1);
        assert!(moved.is_move());
        assert!(!moved.is_insertion());

        let deleted = Change::Deletion {
            value: "y",
            destination: 9,
        };
        assert_eq!(deleted.origin(), None);
        assert_eq!(deleted.into_value(), "y");
    }

    #[test]
    fn test_map_keeps_positions() {
        let moved = Change::Move {
            value: 'a',
            origin: 1,
            destination: 2,
        };
        assert_eq!(
            moved.map(|c| c.to_ascii_uppercase()),
            Change::Move {
                value: 'A',
                origin: 1,
                destination: 2
            }
        );
    }

    #[test]
    fn test_construction_does_not_validate() {
        let far = Change::Insertion {
            value: 0u8,
            destination: usize::MAX,
        };
        assert_eq!(far.destination(), usize::MAX);
        assert!(far.check_bounds(10, 10).is_err());
    }

    #[test]
    fn test_check_bounds() {
        let deleted = Change::Deletion {
            value: 1,
            destination: 3,
        };
        assert_eq!(deleted.check_bounds(4, 0), Ok(()));
        assert_eq!(
            deleted.check_bounds(3, 10),
            Err(ChangesError::DestinationOutOfRange {
                destination: 3,
                len: 3,
                sequence: Side::Old
            })
        );

        let moved = Change::Move {
            value: 1,
            origin: 4,
            destination: 0,
        };
        assert_eq!(
            moved.check_bounds(4, 1),
            Err(ChangesError::OriginOutOfRange { origin: 4, len: 4 })
        );
        assert_eq!(
            moved.check_bounds(5, 0),
            Err(ChangesError::DestinationOutOfRange {
                destination: 0,
                len: 0,
                sequence: Side::New
            })
        );
        assert_eq!(moved.check_bounds(5, 1), Ok(()));
    }

    #[test]
    fn test_check_script_stops_at_first_error() {
        let script = vec![
            Change::Insertion {
                value: 'a',
                destination: 0,
            },
            Change::Substitution {
                value: 'b',
                destination: 5,
            },
            Change::Deletion {
                value: 'c',
                destination: 9,
            },
        ];
        assert_eq!(
            check_script(&script, 1, 2),
            Err(ChangesError::DestinationOutOfRange {
                destination: 5,
                len: 2,
                sequence: Side::New
            })
        );
        assert_eq!(check_script(&script[..1], 0, 1), Ok(()));
    }
}
