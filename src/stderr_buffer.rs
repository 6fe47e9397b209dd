use std::io;
use std::sync::{Mutex, MutexGuard};

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<Vec<String>>> {
    BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Activate buffering. While active, log output is stored
/// instead of printed to stderr.
pub fn activate() {
    *lock() = Some(Vec::new());
}

/// Deactivate buffering and return all collected messages.
pub fn drain() -> Vec<String> {
    lock().take().unwrap_or_default()
}

/// Write a message. If buffering is active the message is stored;
/// otherwise it is printed to stderr immediately.
pub fn warn(msg: String) {
    let mut guard = lock();
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// Writer handed to the tracing subscriber, one per event.
///
/// Bytes collect until flush or drop, then go through [`warn`] as a single message.
#[derive(Debug, Default)]
pub struct BufferedStderr {
    pending: Vec<u8>,
}

impl io::Write for BufferedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            let msg = String::from_utf8_lossy(&self.pending).trim_end().to_string();
            self.pending.clear();
            warn(msg);
        }
        Ok(())
    }
}

impl Drop for BufferedStderr {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/// `MakeWriter` entry point for `tracing_subscriber::fmt().with_writer(...)`.
pub fn writer() -> BufferedStderr {
    BufferedStderr::default()
}
