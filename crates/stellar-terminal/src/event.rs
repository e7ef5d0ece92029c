//! Event bridge between the terminal engine and its embedder.
//!
//! @module terminal/event

use std::sync::mpsc;

// =============================================================================
// TYPES
// =============================================================================

/// Notifications raised while processing shell output or supervising the
/// shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Terminal bell triggered.
    Bell,
    /// Window title changed (OSC 0 / OSC 2).
    TitleChanged(String),
    /// The shell reported its working directory (OSC 7).
    WorkingDirectoryChanged(String),
    /// The shell died and a fresh one was started.
    ChildRespawned { generation: u64 },
    /// The shell is gone for good.
    ChildExited,
}

// =============================================================================
// EVENT PROXY
// =============================================================================

/// Sending half of the event channel. Cheap to clone; sends never block and
/// never fail loudly.
#[derive(Debug, Clone)]
pub struct EventProxy {
    sender: mpsc::Sender<TerminalEvent>,
}

impl EventProxy {
    /// The proxy goes to whoever raises events; the receiver to the embedder.
    pub fn new() -> (Self, mpsc::Receiver<TerminalEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }

    pub fn send_event(&self, event: TerminalEvent) {
        // A dropped receiver just means nobody is listening.
        let _ = self.sender.send(event);
    }

    pub fn send_all(&self, events: impl IntoIterator<Item = TerminalEvent>) {
        for event in events {
            self.send_event(event);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_reaches_the_receiver() {
        let (proxy, rx) = EventProxy::new();
        proxy.send_event(TerminalEvent::Bell);
        assert_eq!(rx.try_recv(), Ok(TerminalEvent::Bell));
    }

    #[test]
    fn batch_arrives_in_order() {
        let (proxy, rx) = EventProxy::new();
        proxy.send_all([
            TerminalEvent::TitleChanged("vim".into()),
            TerminalEvent::ChildRespawned { generation: 2 },
            TerminalEvent::ChildExited,
        ]);
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 3);
        match &events[0] {
            TerminalEvent::TitleChanged(title) => assert_eq!(title, "vim"),
            other => panic!("expected TitleChanged, got {other:?}"),
        }
        assert_eq!(events[1], TerminalEvent::ChildRespawned { generation: 2 });
    }

    #[test]
    fn clones_share_the_channel() {
        let (proxy, rx) = EventProxy::new();
        let other = proxy.clone();
        other.send_event(TerminalEvent::WorkingDirectoryChanged("/tmp".into()));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn sending_without_a_listener_is_harmless() {
        let (proxy, rx) = EventProxy::new();
        drop(rx);
        proxy.send_event(TerminalEvent::Bell);
    }
}
