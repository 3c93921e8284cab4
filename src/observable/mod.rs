mod types;
pub use types::*;

use crate::options::DiffOptions;
use crate::wagner_fischer::changes_with;
use std::fmt;
use std::mem;

/// Holds a sequence and reports how it changed every time it is replaced.
///
/// The script is only computed while an observer is registered.
///
/// # Examples
///
/// ```
/// use changes::observable::ObservableCollection;
/// use changes::wagner_fischer::Change;
///
/// let mut seen = Vec::new();
/// {
///     let mut list = ObservableCollection::new(vec![1, 2, 3])
///         .with_observer(|c: &Change<i32>| seen.push(c.clone()));
///     list.replace(vec![2, 3, 1]);
/// }
/// assert_eq!(seen, vec![Change::Move { value: 1, origin: 0, destination: 2 }]);
/// ```
pub struct ObservableCollection<'a, T> {
    current: Vec<T>,
    observer: Option<Box<dyn ChangeObserver<T> + 'a>>,
    options: DiffOptions,
}

impl<'a, T: PartialEq + Clone> ObservableCollection<'a, T> {
    pub fn new(initial: Vec<T>) -> Self {
        ObservableCollection {
            current: initial,
            observer: None,
            options: DiffOptions::default(),
        }
    }

    pub fn with_observer(mut self, observer: impl ChangeObserver<T> + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.options = options;
        self
    }

    pub fn current(&self) -> &[T] {
        &self.current
    }

    pub fn options(&self) -> DiffOptions {
        self.options
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Registers `observer`, returning the one it replaces.
    pub fn set_observer(
        &mut self,
        observer: impl ChangeObserver<T> + 'a,
    ) -> Option<Box<dyn ChangeObserver<T> + 'a>> {
        self.observer.replace(Box::new(observer))
    }

    pub fn take_observer(&mut self) -> Option<Box<dyn ChangeObserver<T> + 'a>> {
        self.observer.take()
    }

    /// Replaces the current value with `new` and returns the previous one,
    /// notifying the observer of every change in between.
    pub fn replace(&mut self, new: Vec<T>) -> Vec<T> {
        let old = mem::replace(&mut self.current, new);
        if let Some(observer) = self.observer.as_mut() {
            observer.will_begin_changes();
            let script = changes_with(&old, &self.current, self.options);
            debug!(changes = script.len(), "notifying observer");
            for change in &script {
                observer.did_occur_change(change);
            }
            observer.did_end_changes();
        }
        old
    }

    pub fn into_inner(self) -> Vec<T> {
        self.current
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableCollection<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableCollection")
            .field("current", &self.current)
            .field("observer", &self.observer.is_some())
            .field("options", &self.options)
            .finish()
    }
}
