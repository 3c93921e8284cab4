use super::types::{Change, Script};
use std::rc::Rc;

/// One edit recorded in a table cell. Indices are zero-based: `Delete` holds
/// an index into the old sequence, the others an index into the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Insert(usize),
    Delete(usize),
    Substitute(usize),
}

struct Link {
    step: Step,
    len: usize,
    prev: Trail,
}

/// The steps leading to one cell of the table, newest first.
///
/// Cells reached from each other share their common prefix, so copying a
/// cell along the diagonal is a reference count bump and appending a step
/// allocates a single link.
#[derive(Clone, Default)]
pub(crate) struct Trail(Option<Rc<Link>>);

impl Trail {
    pub(crate) fn len(&self) -> usize {
        self.0.as_ref().map_or(0, |link| link.len)
    }

    pub(crate) fn push(&self, step: Step) -> Trail {
        Trail(Some(Rc::new(Link {
            step,
            len: self.len() + 1,
            prev: self.clone(),
        })))
    }

    /// Resolves every step against the two sequences, oldest step first.
    pub(crate) fn to_script<T: Clone>(&self, old: &[T], new: &[T]) -> Script<T> {
        let mut changes: Script<T> = Vec::with_capacity(self.len());
        let mut cursor = self.0.as_deref();
        while let Some(link) = cursor {
            changes.push(match link.step {
                Step::Insert(i) => Change::Insertion {
                    value: new[i].clone(),
                    destination: i,
                },
                Step::Delete(i) => Change::Deletion {
                    value: old[i].clone(),
                    destination: i,
                },
                Step::Substitute(i) => Change::Substitution {
                    value: new[i].clone(),
                    destination: i,
                },
            });
            cursor = link.prev.0.as_deref();
        }
        changes.reverse();
        changes
    }
}

// Unlinks iteratively; the default drop would recurse once per step.
impl Drop for Trail {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(link) = next {
            match Rc::try_unwrap(link) {
                Ok(mut link) => next = link.prev.0.take(),
                Err(_) => break,
            }
        }
    }
}
