use crate::wagner_fischer::{Change, Script};

/// Merges insertion/deletion pairs of equal value into moves.
///
/// The script is scanned once, left to right. An insertion is paired with
/// the first deletion of the same value already kept in the output, and a
/// deletion with the first such insertion; the earlier half is taken out
/// and a `Change::Move` is appended in place of the later one. Each change
/// takes part in at most one move, and substitutions never do.
///
/// # Examples
///
/// ```
/// use changes::reduce::reduce_moves;
/// use changes::wagner_fischer::Change;
///
/// let raw = vec![
///     Change::Deletion { value: 3, destination: 2 },
///     Change::Insertion { value: 3, destination: 4 },
/// ];
/// assert_eq!(
///     reduce_moves(raw),
///     vec![Change::Move { value: 3, origin: 2, destination: 4 }]
/// );
/// ```
pub fn reduce_moves<T: PartialEq>(script: Script<T>) -> Script<T> {
    let before = script.len();
    let mut reduced: Script<T> = Vec::with_capacity(before);

    for change in script {
        let change = match change {
            Change::Insertion { value, destination } => {
                match take_first(&mut reduced, |c| matches!(c, Change::Deletion { value: v, .. } if *v == value)) {
                    Some(origin) => {
                        trace!(origin, destination, "paired insertion with earlier deletion");
                        Change::Move {
                            value,
                            origin,
                            destination,
                        }
                    }
                    None => Change::Insertion { value, destination },
                }
            }
            Change::Deletion { value, destination } => {
                match take_first(&mut reduced, |c| matches!(c, Change::Insertion { value: v, .. } if *v == value)) {
                    Some(insertion) => {
                        trace!(origin = destination, destination = insertion, "paired deletion with earlier insertion");
                        Change::Move {
                            value,
                            origin: destination,
                            destination: insertion,
                        }
                    }
                    None => Change::Deletion { value, destination },
                }
            }
            other => other,
        };
        reduced.push(change);
    }

    debug!(before, after = reduced.len(), "reduced moves");
    reduced
}

/// Removes the first change matching `pred` and returns its destination.
fn take_first<T>(changes: &mut Script<T>, pred: impl Fn(&Change<T>) -> bool) -> Option<usize> {
    let position = changes.iter().position(pred)?;
    Some(changes.remove(position).destination())
}
