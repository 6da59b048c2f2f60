//! Selection model and status-label formatting.

/// Attributes read from a selected file. `size` is a byte count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Text content and hidden flag of the status element.
///
/// The two are always produced as a pair: hidden and empty when nothing is
/// selected, visible and populated otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    text: String,
    hidden: bool,
}

impl Status {
    /// Computes the status for the current selection.
    pub fn of(selection: Option<&SelectedFile>) -> Self {
        match selection {
            None => Self {
                text: String::new(),
                hidden: true,
            },
            Some(file) => Self {
                text: format!("{} • {} KB", file.name, size_kb(file.size)),
                hidden: false,
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Kilobytes (1024 bytes) with one fractional digit. Ties round to the even
/// digit, Rust's default float formatting: 256 bytes is "0.2", 768 is "0.8".
fn size_kb(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / 1024.0)
}
