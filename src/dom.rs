//! web-sys adapters for pages that own their own markup.
//!
//! `bind_selection_display` is the direct-DOM embedding: hand it the file
//! input and the status node and hold on to the returned listener guard.

use gloo::events::EventListener;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::binder::{SelectionBinder, SelectionSource, StatusSink};
use crate::selection::SelectedFile;

/// Reads the first entry of a file input's `FileList`.
pub struct FileInputSource {
    input: HtmlInputElement,
}

impl FileInputSource {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }
}

impl SelectionSource for FileInputSource {
    fn first(&self) -> Option<SelectedFile> {
        self.input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| SelectedFile::new(file.name(), file.size() as u64))
    }
}

/// Writes the text content and `hidden` flag of a display node.
pub struct StatusElementSink {
    element: HtmlElement,
}

impl StatusElementSink {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl StatusSink for StatusElementSink {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.element.set_hidden(hidden);
    }
}

/// Attaches the selection display to change events on `input`.
///
/// The binding lives as long as the returned guard; dropping it detaches
/// the listener. The input is only read, the status node only written.
pub fn bind_selection_display(
    input: HtmlInputElement,
    status: HtmlElement,
) -> EventListener {
    let mut binder = SelectionBinder::new(
        FileInputSource::new(input.clone()),
        StatusElementSink::new(status),
    );
    EventListener::new(&input, "change", move |_event| binder.refresh())
}
