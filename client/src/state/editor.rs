//! Builder-page state: the open form editor plus page-level UI flags.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use grid::editor::FormEditor;

/// Which builder tab is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuilderTab {
    /// The editable canvas.
    #[default]
    Edit,
    /// Read-only preview of the form as respondents will see it.
    Preview,
}

/// A message surfaced to the user in the builder header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    /// An error surfaced from validation or the persistence collaborator.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }

    /// A non-error notice (successful save, etc.).
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }
}

/// State for the builder page.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    /// The open editor; `None` until the form has loaded.
    pub editor: Option<FormEditor>,
    /// A load is in flight.
    pub loading: bool,
    /// A save is in flight. The document stays editable meanwhile.
    pub save_pending: bool,
    /// Active builder tab.
    pub tab: BuilderTab,
    /// Last surfaced message, if any.
    pub status: Option<StatusMessage>,
}

impl EditorState {
    /// Run `f` against the open editor, if one is loaded.
    pub fn with_editor(&mut self, f: impl FnOnce(&mut FormEditor)) {
        if let Some(editor) = &mut self.editor {
            f(editor);
        }
    }

    /// Surface an error message.
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::error(text));
    }

    /// Surface an informational message.
    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::info(text));
    }
}
