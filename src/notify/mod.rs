pub mod backend;
pub mod console;
pub mod notifier;
pub mod scripted;
pub mod timer;

pub use backend::{CustomOptions, DialogBackend, FormDialog, FormResponse, Hook};
pub use notifier::Notifier;
pub use timer::ToastTimer;
