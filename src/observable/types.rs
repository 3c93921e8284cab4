use crate::wagner_fischer::Change;

/// Receives the changes of an [`ObservableCollection`](super::ObservableCollection)
/// each time its value is replaced.
///
/// For every replacement the calls are, in order: `will_begin_changes` once,
/// `did_occur_change` once per change in script order, `did_end_changes` once.
pub trait ChangeObserver<T> {
    fn will_begin_changes(&mut self) {}

    fn did_occur_change(&mut self, change: &Change<T>);

    fn did_end_changes(&mut self) {}
}

impl<T, F: FnMut(&Change<T>)> ChangeObserver<T> for F {
    fn did_occur_change(&mut self, change: &Change<T>) {
        self(change)
    }
}
