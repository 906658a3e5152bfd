use shared_ui::{ToastOptions, Toasts};

/// Transient user-facing messages.
pub trait Notifier {
    fn success(&self, message: &str);
}

/// [`Notifier`] that shows toasts through the app's `ToastProvider`.
pub struct ToastNotifier {
    toasts: Toasts,
}

impl ToastNotifier {
    pub fn new(toasts: Toasts) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        tracing::info!(message, "notifying");
        self.toasts.success(message.to_string(), ToastOptions::new());
    }
}
