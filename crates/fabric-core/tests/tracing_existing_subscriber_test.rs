//! `init_tracing` when the host process installed its own subscriber first.
//! Kept in its own test binary so the global subscriber is not shared.

use std::io::Write;
use std::sync::{Arc, Mutex};

use fabric_core::tracing::init_tracing;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// The host subscriber survives and records why ours was not installed.
#[test]
fn test_existing_subscriber_is_kept() {
    let captured = Captured::default();
    let writer = captured.clone();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .try_init()
        .unwrap();

    init_tracing();
    tracing::info!("after init");

    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("global subscriber already set"));
    assert!(logs.contains("after init"));
}
