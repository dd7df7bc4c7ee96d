use std::io::Write;
use std::sync::Mutex;
use crate::gateway::events::Notifier;

// ConsoleNotifier prints each message as a `Notification: ...` line
pub struct ConsoleNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writeln!(out, "Notification: {}", message).and_then(|_| out.flush()) {
            tracing::warn!(error = %err, "failed to write console notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use crate::gateway::console::ConsoleNotifier;
    use crate::gateway::events::Notifier;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("buffer lock").write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_should_write_notification_line() {
        let buffer = SharedBuffer::default();
        let notifier = ConsoleNotifier::with_writer(Box::new(buffer.clone()));
        notifier.notify("Book added: 1984");
        notifier.notify("Book removed: 1984");

        let text = String::from_utf8(buffer.0.lock().expect("buffer lock").clone()).expect("utf8");
        assert_eq!("Notification: Book added: 1984\nNotification: Book removed: 1984\n", text);
    }

    #[tokio::test]
    async fn test_should_swallow_write_failures() {
        let notifier = ConsoleNotifier::with_writer(Box::new(BrokenPipe));
        notifier.notify("Book added: 1984");
    }
}
