use std::time::Duration;

use crate::constants::TOAST_TIMER_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    #[default]
    Success,
    Error,
    Warning,
    Info,
    Question,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Success => "success",
            Icon::Error => "error",
            Icon::Warning => "warning",
            Icon::Info => "info",
            Icon::Question => "question",
        }
    }
}

/// Where a toast is pinned on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    Top,
    TopStart,
    #[default]
    TopEnd,
    Center,
    CenterStart,
    CenterEnd,
    Bottom,
    BottomStart,
    BottomEnd,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::TopStart => "top-start",
            Position::TopEnd => "top-end",
            Position::Center => "center",
            Position::CenterStart => "center-start",
            Position::CenterEnd => "center-end",
            Position::Bottom => "bottom",
            Position::BottomStart => "bottom-start",
            Position::BottomEnd => "bottom-end",
        }
    }
}

/// Kind of a flat banner notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyKind {
    #[default]
    Success,
    Warning,
    Error,
    Info,
}

impl NotifyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyKind::Success => "success",
            NotifyKind::Warning => "warning",
            NotifyKind::Error => "error",
            NotifyKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub message: String,
    pub icon: Icon,
    pub position: Position,
}

impl ToastOptions {
    pub fn new(message: impl Into<String>) -> Self {
        ToastOptions {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// Options shared by the success and error dialogs. `footer` may carry markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub message: String,
    pub title: String,
    pub footer: String,
}

impl MessageOptions {
    pub fn new(message: impl Into<String>) -> Self {
        MessageOptions {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }
}

/// Result of a custom dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// The user confirmed and the extractor produced a value.
    Confirmed(T),
    /// The dialog was dismissed.
    Cancelled,
    /// The user confirmed but the extractor came back empty.
    Invalid,
}

/// Why a dialog closed without being confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Cancel,
    Backdrop,
    Close,
    Esc,
    Timer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub icon: Icon,
    pub position: Position,
    pub timer: Duration,
    pub timer_progress_bar: bool,
    pub show_confirm_button: bool,
    pub pause_on_hover: bool,
}

impl Toast {
    pub fn from_options(options: ToastOptions, timer: Duration) -> Self {
        Toast {
            title: options.message,
            icon: options.icon,
            position: options.position,
            timer,
            timer_progress_bar: true,
            show_confirm_button: false,
            pause_on_hover: true,
        }
    }
}

impl Default for Toast {
    fn default() -> Self {
        Toast::from_options(
            ToastOptions::default(),
            Duration::from_millis(TOAST_TIMER_MS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal {
    pub icon: Option<Icon>,
    pub title: String,
    pub text: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NotifyKind,
    pub text: String,
}

/// Everything a backend can show that needs no answer from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Toast(Toast),
    Modal(Modal),
    Notice(Notice),
}
