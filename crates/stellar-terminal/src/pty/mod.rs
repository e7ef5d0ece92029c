//! PTY management using the `portable-pty` crate.
//!
//! Provides [`PtySession`] for running a shell inside a pseudo-terminal,
//! reading and writing its byte stream, resizing, and keeping it alive.

mod session;
mod types;

pub use session::*;
pub use types::*;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn options() -> SessionOptions {
        SessionOptions {
            max_respawns: 1,
            ..SessionOptions::default()
        }
    }

    /// Read until `needle` shows up or five seconds pass.
    fn read_until(session: &mut PtySession, needle: &str) -> String {
        let mut output = String::new();
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline && !output.contains(needle) {
            output.push_str(&String::from_utf8_lossy(&session.read(4096)));
        }
        output
    }

    #[test]
    fn spawn_and_echo() {
        let mut session = PtySession::spawn("/bin/sh", options()).expect("spawn sh");
        assert!(session.is_alive());
        assert!(session.pid().is_some());
        assert_eq!(session.shell_path(), "/bin/sh");

        session.write(b"echo hel''lo\n");
        let output = read_until(&mut session, "hello");
        assert!(output.contains("hello"), "expected 'hello' in output, got: {output:?}");
    }

    #[test]
    fn read_is_bounded_by_max_bytes() {
        let mut session = PtySession::spawn("/bin/sh", options()).expect("spawn sh");
        session.write(b"printf '%0200d\\n' 0\n");
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut total = 0;
        while Instant::now() < deadline && total < 200 {
            let chunk = session.read(16);
            assert!(chunk.len() <= 16);
            total += chunk.len();
        }
        assert!(total >= 200);
    }

    #[test]
    fn spawn_failure_is_reported() {
        let result = PtySession::spawn("/nonexistent/shell", options());
        assert!(matches!(result, Err(PtyError::SpawnFailed(_))));
    }

    #[test]
    fn resize_reaches_the_shell() {
        let mut session = PtySession::spawn("/bin/sh", options()).expect("spawn sh");
        session.resize(40, 100).expect("resize");
        assert_eq!((session.options().rows, session.options().cols), (40, 100));
        session.write(b"stty size\n");
        let output = read_until(&mut session, "40 100");
        assert!(output.contains("40 100"), "got: {output:?}");
    }

    #[test]
    fn exited_shell_is_respawned_then_given_up() {
        let mut session = PtySession::spawn("/bin/sh", options()).expect("spawn sh");
        session.write(b"exit\n");
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline && session.generation() == 0 {
            session.read(4096);
        }
        assert_eq!(session.generation(), 1);
        assert!(session.is_alive());

        // The single allowed respawn is used up.
        session.write(b"exit\n");
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline && !session.is_closed() {
            session.read(4096);
        }
        assert!(!session.is_alive());
        assert!(session.is_closed());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn write_does_not_wait_for_a_stalled_shell() {
        let mut session = PtySession::spawn("/bin/sh", options()).expect("spawn sh");
        session.write(b"stty raw -echo; echo RE''ADY; sleep 20\n");
        let output = read_until(&mut session, "READY");
        assert!(output.contains("READY"), "got: {output:?}");

        let started = Instant::now();
        let block = [b'x'; 4096];
        for _ in 0..128 {
            session.write(&block);
        }
        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(session.unsent_len() > 0);

        // Polling keeps working with input backed up.
        session.read(4096);

        let started = Instant::now();
        session.close();
        assert!(started.elapsed() < Duration::from_secs(3));
        assert_eq!(session.unsent_len(), 0);
        assert!(!session.is_alive());
    }

    #[test]
    fn close_does_not_wait_on_a_lingering_background_job() {
        let mut session = PtySession::spawn("/bin/sh", options()).expect("spawn sh");
        // The job ignores hangup and keeps the slave side open after sh dies.
        session.write(b"(trap '' HUP; sleep 5) & echo BG''STARTED\n");
        let output = read_until(&mut session, "BGSTARTED");
        assert!(output.contains("BGSTARTED"), "got: {output:?}");

        let started = Instant::now();
        session.close();
        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(session.is_closed());
        assert!(session.read(4096).is_empty());
    }

    #[test]
    fn close_is_idempotent_and_silences_io() {
        let mut session = PtySession::spawn("/bin/sh", options()).expect("spawn sh");
        session.close();
        session.close();
        assert!(!session.is_alive());
        assert!(session.pid().is_none());
        session.write(b"echo ignored\n");
        assert!(session.read(4096).is_empty());
        assert!(session.resize(10, 10).is_ok());
    }

    #[test]
    fn options_from_config() {
        let mut config = stellar_config::StellarConfig::default();
        config.shell.args = vec!["-i".into()];
        config.shell.login_shell = true;
        config.shell.env.insert("B".into(), "2".into());
        config.shell.env.insert("A".into(), "1".into());
        config.terminal.poll_interval_ms = 25;

        let opts = SessionOptions::from_config(&config, "/bin/bash");
        assert_eq!(opts.args, vec!["-i".to_string(), "--login".to_string()]);
        assert_eq!(opts.env[0], ("A".to_string(), "1".to_string()));
        assert_eq!(opts.poll_interval, Duration::from_millis(25));
        assert_eq!((opts.cols, opts.rows), (80, 24));
    }
}
