use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::dialog::{Dialog, DismissReason};
use crate::notify::backend::{DialogBackend, FormDialog, FormResponse};

const CANCEL_WORDS: [&str; 3] = [":q", "cancel", "quit"];

/// Terminal rendition of the dialogs. Forms are filled in line by line;
/// typing `cancel` or closing stdin dismisses them.
pub struct ConsoleBackend {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl ConsoleBackend {
    pub fn new() -> Self {
        ConsoleBackend {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DialogBackend for ConsoleBackend {
    async fn show(&self, dialog: Dialog) -> Result<()> {
        match dialog {
            Dialog::Toast(toast) => {
                // printed lines stay put, so there is no countdown to run
                debug!("toast for {:?}", toast.timer);
                println!("[{}] {}", toast.icon.as_str(), toast.title);
            }
            Dialog::Modal(modal) => {
                let icon = modal.icon.map(|i| i.as_str()).unwrap_or("info");
                println!("== [{}] {} ==", icon, modal.title);
                if !modal.text.is_empty() {
                    println!("{}", modal.text);
                }
                if !modal.footer.is_empty() {
                    println!("-- {}", modal.footer);
                }
            }
            Dialog::Notice(notice) => {
                println!("{}: {}", notice.kind.as_str().to_uppercase(), notice.text);
            }
        }
        Ok(())
    }

    async fn open_form(&self, mut dialog: FormDialog) -> Result<FormResponse> {
        dialog.run_will_open();
        println!("== {} ==", dialog.title);
        dialog.run_did_open();

        let hint = dialog
            .content
            .pickers()
            .first()
            .map(|picker| format!(" ({})", picker.options.format))
            .unwrap_or_default();

        let mut lines = self.lines.lock().await;
        let mut values = Vec::new();

        for input in dialog.content.inputs() {
            if dialog.content.is_disabled(&input.id) {
                continue;
            }

            let label = input
                .placeholder
                .or(input.name)
                .unwrap_or_else(|| input.id.clone());
            print!("{label}{hint}: ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                return Ok(FormResponse::Dismissed(DismissReason::Close));
            };
            if CANCEL_WORDS.contains(&line.trim()) {
                return Ok(FormResponse::Dismissed(DismissReason::Cancel));
            }
            values.push((input.id, line));
        }

        Ok(FormResponse::Confirmed(dialog.content.submit(values)))
    }
}
