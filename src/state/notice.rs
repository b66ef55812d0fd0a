//! Transient user notices (toasts).
//!
//! DESIGN
//! ======
//! A bounded queue: pushing beyond `NOTICE_CAP` drops the oldest entry.
//! Expiry is scheduled by `components::toaster::notify` with a browser
//! timer; this state only tracks ids so a late timer cannot dismiss a newer
//! notice.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Maximum number of notices shown at once.
pub const NOTICE_CAP: usize = 5;
/// How long a notice stays visible before auto-dismissal.
pub const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Info => "notice notice--info",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, text: text.into() });
        if self.items.len() > NOTICE_CAP {
            let overflow = self.items.len() - NOTICE_CAP;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a notice; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
