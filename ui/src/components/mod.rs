//! Shared form controls and app chrome.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label, Select};

mod toast;
pub use toast::{use_toast, Toast, ToastKind, ToastOptions, ToastProvider, Toasts};

mod modal;
pub use modal::{ConfirmDialog, ModalOverlay};

mod loader;
pub use loader::{use_loading, LoadingProvider};
