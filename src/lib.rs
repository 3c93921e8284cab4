//! Minimal edit scripts between two sequences.
//!
//! [`wagner_fischer`] finds the shortest list of insertions, deletions and
//! substitutions that turns an old sequence into a new one, and by default
//! hands it to [`reduce`], which merges insertion/deletion pairs of equal
//! value into moves.
//!
//! ```
//! use changes::{ChangesSince, Change};
//!
//! assert_eq!(
//!     "kitten".changes_since("sitting"),
//!     vec![
//!         Change::Substitution { value: 'k', destination: 0 },
//!         Change::Substitution { value: 'e', destination: 4 },
//!         Change::Deletion { value: 'g', destination: 6 },
//!     ]
//! );
//! ```

#[macro_use]
mod tracing_macros;

pub mod error;
pub mod observable;
pub mod options;
pub mod reduce;
pub mod since;
pub mod wagner_fischer;

pub use error::{ChangesError, Side};
pub use observable::{ChangeObserver, ObservableCollection};
pub use options::DiffOptions;
pub use reduce::reduce_moves;
pub use since::ChangesSince;
pub use wagner_fischer::{changes, changes_with, check_script, edit_script, Change, Script};
