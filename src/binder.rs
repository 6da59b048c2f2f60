//! The selection display binder and its collaborator seams.
//!
//! The binder reacts to change notifications from a file-input control and
//! keeps a status label synchronized with the current selection. Both
//! collaborators are passed in explicitly so the binder can be exercised
//! without a page environment.

use crate::selection::{SelectedFile, Status};

/// Readable side of a file-input control: the current selection.
pub trait SelectionSource {
    /// First entry of the current selection, if any. An absent or empty
    /// selection is "no file", not an error.
    fn first(&self) -> Option<SelectedFile>;
}

/// Writable side of a status display node.
pub trait StatusSink {
    fn set_text(&mut self, text: &str);
    fn set_hidden(&mut self, hidden: bool);
}

/// Keeps a status label synchronized with a file-input's selection.
///
/// Holds no state of its own between notifications; every `refresh`
/// recomputes the label from whatever the source currently reports.
pub struct SelectionBinder<S, K> {
    source: S,
    sink: K,
}

impl<S: SelectionSource, K: StatusSink> SelectionBinder<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    /// Handles one change notification: read the selection, rewrite the
    /// status node. Text and hidden flag are written together on every path.
    pub fn refresh(&mut self) {
        let selection = self.source.first();
        let status = Status::of(selection.as_ref());
        self.sink.set_text(status.text());
        self.sink.set_hidden(status.is_hidden());
    }
}
