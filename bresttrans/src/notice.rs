//! Transient user notices.
//!
//! Flows never print; they post short notices that the front end
//! drains and shows (the terminal stand-in for a toast). Posting is
//! infallible from the flow's point of view: once the receiving side
//! is gone the session is over and the notice has nowhere to go, so
//! the send quietly becomes a no-op.

use tokio::sync::mpsc;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation or status
    Info,
    /// Recoverable failure the user should see
    Error,
}

/// One transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Display text.
    pub text: String,
}

/// Sending handle given to flows.
#[derive(Debug, Clone)]
pub struct Notices {
    tx: mpsc::UnboundedSender<Notice>,
}

impl Notices {
    /// Create a notice channel: the handle for flows, the receiver
    /// for the front end to drain.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Post an informational notice.
    pub fn info(&self, text: impl Into<String>) {
        self.post(NoticeLevel::Info, text.into());
    }

    /// Post an error notice.
    pub fn error(&self, text: impl Into<String>) {
        self.post(NoticeLevel::Error, text.into());
    }

    fn post(&self, level: NoticeLevel, text: String) {
        // A closed receiver means the session ended mid-flight.
        let _ = self.tx.send(Notice { level, text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_arrive_in_post_order() {
        let (notices, mut rx) = Notices::channel();
        notices.info("Сохранено");
        notices.error("Ошибка загрузки погоды");

        let first = rx.try_recv().unwrap();
        assert_eq!(first.level, NoticeLevel::Info);
        assert_eq!(first.text, "Сохранено");

        let second = rx.try_recv().unwrap();
        assert_eq!(second.level, NoticeLevel::Error);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn posting_after_receiver_drop_is_a_no_op() {
        let (notices, rx) = Notices::channel();
        drop(rx);
        notices.info("never seen");
    }
}
