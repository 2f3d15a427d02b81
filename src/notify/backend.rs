use std::fmt;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::form::{DialogContent, SubmittedForm};
use crate::models::dialog::{Dialog, DismissReason};

/// Lifecycle hook run against the dialog content.
pub type Hook = Box<dyn FnOnce(&mut DialogContent) + Send>;

/// What a custom dialog is built from. Both hooks default to doing nothing.
pub struct CustomOptions {
    pub title: String,
    pub html: String,
    pub will_open: Option<Hook>,
    pub did_open: Option<Hook>,
}

impl CustomOptions {
    pub fn new(title: impl Into<String>, html: impl Into<String>) -> Self {
        CustomOptions {
            title: title.into(),
            html: html.into(),
            will_open: None,
            did_open: None,
        }
    }

    /// Runs before the dialog is visible.
    pub fn will_open<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&mut DialogContent) + Send + 'static,
    {
        self.will_open = Some(Box::new(hook));
        self
    }

    /// Runs once the dialog is visible.
    pub fn did_open<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&mut DialogContent) + Send + 'static,
    {
        self.did_open = Some(Box::new(hook));
        self
    }
}

impl Default for CustomOptions {
    fn default() -> Self {
        CustomOptions::new("", "")
    }
}

/// A custom dialog handed to a backend. Backends call [`FormDialog::run_will_open`]
/// before rendering and [`FormDialog::run_did_open`] once it is on screen.
pub struct FormDialog {
    pub id: Uuid,
    pub title: String,
    pub content: DialogContent,
    pub backdrop: bool,
    pub focus_confirm: bool,
    pub show_cancel_button: bool,
    will_open: Option<Hook>,
    did_open: Option<Hook>,
}

impl FormDialog {
    pub fn from_options(options: CustomOptions) -> Self {
        FormDialog {
            id: Uuid::new_v4(),
            title: options.title,
            content: DialogContent::new(options.html),
            backdrop: false,
            focus_confirm: false,
            show_cancel_button: true,
            will_open: options.will_open,
            did_open: options.did_open,
        }
    }

    pub fn run_will_open(&mut self) {
        if let Some(hook) = self.will_open.take() {
            hook(&mut self.content);
        }
    }

    pub fn run_did_open(&mut self) {
        if let Some(hook) = self.did_open.take() {
            hook(&mut self.content);
        }
    }
}

impl fmt::Debug for FormDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormDialog")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("backdrop", &self.backdrop)
            .field("focus_confirm", &self.focus_confirm)
            .field("show_cancel_button", &self.show_cancel_button)
            .field("will_open", &self.will_open.is_some())
            .field("did_open", &self.did_open.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResponse {
    Confirmed(SubmittedForm),
    Dismissed(DismissReason),
}

/// The alert/dialog library the notifier drives.
#[async_trait]
pub trait DialogBackend: Send + Sync {
    /// Shows something that needs no answer.
    async fn show(&self, dialog: Dialog) -> Result<()>;

    /// Shows a custom dialog and waits for the user to confirm or dismiss it.
    async fn open_form(&self, dialog: FormDialog) -> Result<FormResponse>;
}

#[async_trait]
impl<'a, B> DialogBackend for &'a B
where
    B: DialogBackend + ?Sized,
{
    async fn show(&self, dialog: Dialog) -> Result<()> {
        (**self).show(dialog).await
    }

    async fn open_form(&self, dialog: FormDialog) -> Result<FormResponse> {
        (**self).open_form(dialog).await
    }
}
