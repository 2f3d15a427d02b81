use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::form::DialogContent;
use crate::models::dialog::{Dialog, DismissReason, Toast};
use crate::notify::backend::{DialogBackend, FormDialog, FormResponse};
use crate::notify::timer::ToastTimer;

/// What the scripted user does with the next custom dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Type these values (keyed by input id) and press OK.
    Confirm(Vec<(String, String)>),
    Dismiss(DismissReason),
}

impl ScriptedAnswer {
    pub fn confirm<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        ScriptedAnswer::Confirm(
            values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A custom dialog as it looked once both hooks had run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub title: String,
    pub content: DialogContent,
    pub backdrop: bool,
    pub show_cancel_button: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presented {
    Dialog(Dialog),
    Form(FormSnapshot),
}

/// Backend that replays queued answers and remembers everything it was
/// asked to show. Typing into a field that is still disabled is an error.
/// Toasts get a live countdown that the pointer helpers pause and resume.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    answers: Mutex<VecDeque<ScriptedAnswer>>,
    presented: Mutex<Vec<Presented>>,
    toasts: Mutex<Vec<(Toast, ToastTimer)>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, answer: ScriptedAnswer) -> Self {
        self.push_answer(answer);
        self
    }

    pub fn push_answer(&self, answer: ScriptedAnswer) {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(answer);
    }

    pub fn presented(&self) -> Vec<Presented> {
        self.presented
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn dialogs(&self) -> Vec<Dialog> {
        self.presented()
            .into_iter()
            .filter_map(|p| match p {
                Presented::Dialog(dialog) => Some(dialog),
                Presented::Form(_) => None,
            })
            .collect()
    }

    pub fn forms(&self) -> Vec<FormSnapshot> {
        self.presented()
            .into_iter()
            .filter_map(|p| match p {
                Presented::Form(form) => Some(form),
                Presented::Dialog(_) => None,
            })
            .collect()
    }

    /// Pointer moves over the `index`th toast shown so far.
    pub fn pointer_enter_toast(&self, index: usize) {
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((_, timer)) = toasts.get_mut(index).filter(|(t, _)| t.pause_on_hover) {
            timer.pause();
        }
    }

    pub fn pointer_leave_toast(&self, index: usize) {
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((_, timer)) = toasts.get_mut(index) {
            timer.resume();
        }
    }

    /// Toasts whose countdown has not run out.
    pub fn visible_toasts(&self) -> Vec<Toast> {
        let toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        toasts
            .iter()
            .filter(|(_, timer)| !timer.is_expired())
            .map(|(toast, _)| toast.clone())
            .collect()
    }

    fn record(&self, item: Presented) {
        self.presented
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }
}

#[async_trait]
impl DialogBackend for ScriptedBackend {
    async fn show(&self, dialog: Dialog) -> Result<()> {
        if let Dialog::Toast(toast) = &dialog {
            let timer = ToastTimer::start(toast.timer);
            self.toasts
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((toast.clone(), timer));
        }
        self.record(Presented::Dialog(dialog));
        Ok(())
    }

    async fn open_form(&self, mut dialog: FormDialog) -> Result<FormResponse> {
        dialog.run_will_open();
        dialog.run_did_open();
        self.record(Presented::Form(FormSnapshot {
            title: dialog.title.clone(),
            content: dialog.content.clone(),
            backdrop: dialog.backdrop,
            show_cancel_button: dialog.show_cancel_button,
        }));

        let answer = self
            .answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match answer {
            None => bail!("no scripted answer left for dialog \"{}\"", dialog.title),
            Some(ScriptedAnswer::Dismiss(reason)) => Ok(FormResponse::Dismissed(reason)),
            Some(ScriptedAnswer::Confirm(values)) => {
                for (id, _) in &values {
                    if dialog.content.is_disabled(id) {
                        bail!("field {id} is disabled");
                    }
                }
                Ok(FormResponse::Confirmed(dialog.content.submit(values)))
            }
        }
    }
}
