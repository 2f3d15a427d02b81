use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::NotifierConfig;
use crate::form::SubmittedForm;
use crate::models::dialog::{
    Dialog, DialogOutcome, Icon, MessageOptions, Modal, Notice, NotifyKind, Toast, ToastOptions,
};
use crate::notify::backend::{CustomOptions, DialogBackend, FormDialog, FormResponse};

/// Uniform calls over whatever dialog backend the page uses.
pub struct Notifier<B> {
    backend: B,
    toast_timer: Duration,
}

impl<B: DialogBackend> Notifier<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, &NotifierConfig::default())
    }

    pub fn with_config(backend: B, config: &NotifierConfig) -> Self {
        Notifier {
            backend,
            toast_timer: config.toast_timer,
        }
    }

    /// Timed notification that goes away on its own.
    pub async fn toast(&self, options: ToastOptions) -> Result<()> {
        debug!("toast: {}", options.message);
        let toast = Toast::from_options(options, self.toast_timer);
        self.backend.show(Dialog::Toast(toast)).await
    }

    pub async fn success(&self, options: MessageOptions) -> Result<()> {
        self.modal(Icon::Success, options).await
    }

    pub async fn error(&self, options: MessageOptions) -> Result<()> {
        self.modal(Icon::Error, options).await
    }

    /// Flat banner across the top of the page.
    pub async fn notify(&self, message: impl Into<String>, kind: NotifyKind) -> Result<()> {
        let notice = Notice {
            kind,
            text: message.into(),
        };
        self.backend.show(Dialog::Notice(notice)).await
    }

    /// Plain titled alert without footer.
    pub async fn alert_msg(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        icon: Icon,
    ) -> Result<()> {
        let modal = Modal {
            icon: Some(icon),
            title: title.into(),
            text: message.into(),
            footer: String::new(),
        };
        self.backend.show(Dialog::Modal(modal)).await
    }

    /// Opens a custom dialog and waits for it. `extract` reads the confirmed
    /// form; returning None turns a confirmation into [`DialogOutcome::Invalid`].
    pub async fn custom<T, F>(&self, options: CustomOptions, extract: F) -> Result<DialogOutcome<T>>
    where
        F: FnOnce(&SubmittedForm) -> Option<T>,
    {
        let dialog = FormDialog::from_options(options);
        let dialog_id = dialog.id;
        info!(%dialog_id, "opening dialog \"{}\"", dialog.title);

        let outcome = match self.backend.open_form(dialog).await? {
            FormResponse::Dismissed(reason) => {
                debug!(%dialog_id, "dialog dismissed: {:?}", reason);
                DialogOutcome::Cancelled
            }
            FormResponse::Confirmed(form) => match extract(&form) {
                Some(value) => DialogOutcome::Confirmed(value),
                None => {
                    debug!(%dialog_id, "dialog confirmed with nothing to extract");
                    DialogOutcome::Invalid
                }
            },
        };

        Ok(outcome)
    }

    /// Callback flavour of [`Notifier::custom`]: `callback` gets `Some` with
    /// the extracted value, or `None` when the dialog was dismissed or empty.
    pub async fn custom_with_callback<T, F, C>(
        &self,
        options: CustomOptions,
        extract: F,
        callback: C,
    ) -> Result<()>
    where
        F: FnOnce(&SubmittedForm) -> Option<T>,
        C: FnOnce(Option<T>),
    {
        match self.custom(options, extract).await? {
            DialogOutcome::Confirmed(value) => callback(Some(value)),
            DialogOutcome::Cancelled | DialogOutcome::Invalid => callback(None),
        }
        Ok(())
    }

    async fn modal(&self, icon: Icon, options: MessageOptions) -> Result<()> {
        let modal = Modal {
            icon: Some(icon),
            title: options.title,
            text: options.message,
            footer: options.footer,
        };
        self.backend.show(Dialog::Modal(modal)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dialog::{DismissReason, Position};
    use crate::notify::scripted::{ScriptedAnswer, ScriptedBackend};
    use tokio::time::advance;

    const FORM: &str = r#"<input id="name">"#;

    fn who() -> CustomOptions {
        CustomOptions::new("Who?", FORM)
    }

    fn read_name(form: &SubmittedForm) -> Option<String> {
        form.value("name").filter(|v| !v.is_empty())
    }

    #[tokio::test]
    async fn toast_uses_configured_timer() {
        let backend = ScriptedBackend::new();
        let config = NotifierConfig {
            toast_timer: Duration::from_millis(1200),
        };
        let notifier = Notifier::with_config(&backend, &config);

        notifier
            .toast(ToastOptions::new("Saved").position(Position::Bottom))
            .await
            .unwrap();

        let dialogs = backend.dialogs();
        let Dialog::Toast(toast) = &dialogs[0] else {
            panic!("expected toast, got {:?}", dialogs[0]);
        };
        assert_eq!(toast.title, "Saved");
        assert_eq!(toast.timer, Duration::from_millis(1200));
        assert_eq!(toast.position, Position::Bottom);
        assert!(!toast.show_confirm_button);
    }

    #[tokio::test(start_paused = true)]
    async fn toast_stays_while_hovered() {
        let backend = ScriptedBackend::new();
        let notifier = Notifier::new(&backend);
        notifier.toast(ToastOptions::new("Saved")).await.unwrap();

        advance(Duration::from_secs(2)).await;
        backend.pointer_enter_toast(0);
        advance(Duration::from_secs(10)).await;
        assert_eq!(backend.visible_toasts().len(), 1);

        backend.pointer_leave_toast(0);
        advance(Duration::from_millis(999)).await;
        assert_eq!(backend.visible_toasts().len(), 1);
        advance(Duration::from_millis(1)).await;
        assert!(backend.visible_toasts().is_empty());
    }

    #[tokio::test]
    async fn success_and_error_pick_icons() {
        let backend = ScriptedBackend::new();
        let notifier = Notifier::new(&backend);

        notifier
            .success(MessageOptions::new("done").title("Yay").footer("f"))
            .await
            .unwrap();
        notifier.error(MessageOptions::new("nope")).await.unwrap();
        notifier.alert_msg("Hi", "there", Icon::Info).await.unwrap();
        notifier
            .notify("banner", NotifyKind::Warning)
            .await
            .unwrap();

        let dialogs = backend.dialogs();
        assert_eq!(
            dialogs[0],
            Dialog::Modal(Modal {
                icon: Some(Icon::Success),
                title: "Yay".into(),
                text: "done".into(),
                footer: "f".into(),
            })
        );
        assert!(matches!(
            &dialogs[1],
            Dialog::Modal(m) if m.icon == Some(Icon::Error) && m.text == "nope"
        ));
        assert!(matches!(
            &dialogs[2],
            Dialog::Modal(m) if m.icon == Some(Icon::Info) && m.title == "Hi"
        ));
        assert!(matches!(
            &dialogs[3],
            Dialog::Notice(n) if n.kind == NotifyKind::Warning
        ));
    }

    #[tokio::test]
    async fn custom_outcomes() {
        let backend = ScriptedBackend::new()
            .answer(ScriptedAnswer::confirm([("name", "Ada")]))
            .answer(ScriptedAnswer::confirm([("name", "")]))
            .answer(ScriptedAnswer::Dismiss(DismissReason::Cancel));
        let notifier = Notifier::new(&backend);

        let confirmed = notifier.custom(who(), read_name).await.unwrap();
        let empty = notifier.custom(who(), read_name).await.unwrap();
        let cancelled = notifier.custom(who(), read_name).await.unwrap();

        assert_eq!(confirmed, DialogOutcome::Confirmed("Ada".to_string()));
        assert_eq!(empty, DialogOutcome::Invalid);
        assert_eq!(cancelled, DialogOutcome::Cancelled);
    }

    #[tokio::test]
    async fn callback_always_called() {
        let backend = ScriptedBackend::new()
            .answer(ScriptedAnswer::confirm([("name", "Ada")]))
            .answer(ScriptedAnswer::Dismiss(DismissReason::Esc));
        let notifier = Notifier::new(&backend);
        let mut seen = Vec::new();

        for _ in 0..2 {
            notifier
                .custom_with_callback(who(), read_name, |v| seen.push(v))
                .await
                .unwrap();
        }

        assert_eq!(seen, vec![Some("Ada".to_string()), None]);
    }

    #[tokio::test]
    async fn callback_gets_none_for_empty_value() {
        let backend = ScriptedBackend::new().answer(ScriptedAnswer::confirm([("name", "")]));
        let notifier = Notifier::new(&backend);
        let mut seen = Vec::new();

        notifier
            .custom_with_callback(who(), read_name, |v| seen.push(v))
            .await
            .unwrap();

        assert_eq!(seen, vec![None]);
        assert_eq!(backend.forms().len(), 1);
    }
}
