/// Blocking yes/no question asked before a destructive operation.
///
/// Any `Fn(&str) -> bool` is a prompt, so a host can pass a closure that
/// opens a dialog and tests can pass `|_| true`.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// A prompt that always gives the same answer. For headless hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
