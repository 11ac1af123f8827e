use std::time::Duration;

/// How long a notice stays up before its timer hides it.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

pub const GENERIC_ERROR: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
pub const SIGNUP_INCOMPLETE: &str = "Please enter an email and pick an activity.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient feedback area shown after an action completes.
///
/// Every `show` bumps a generation; the dismissal timer for that notice carries
/// the generation and `expire` ignores stale ones, so an older timer cannot
/// hide a newer notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    current: Option<(NoticeKind, String)>,
    generation: u64,
}

impl Notice {
    /// Show `text` and return the token its dismissal timer must present.
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some((kind, text.into()));
        self.generation
    }

    /// Hide the notice if `token` is still the latest. Returns whether it hid.
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// Token of the most recent `show`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_hidden(&self) -> bool {
        self.current.is_none()
    }

    pub fn kind(&self) -> Option<NoticeKind> {
        self.current.as_ref().map(|(kind, _)| *kind)
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, text)| text.as_str())
    }
}
