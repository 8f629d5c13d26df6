//! Terminal status output.

use std::io::{self, Write};

use gcs_registry::{Status, Ui};

/// [`Ui`] that prints status lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalUi;

impl Ui for TerminalUi {
    fn status(&self) -> Box<dyn Status> {
        Box::new(TerminalStatus::new(io::stderr()))
    }
}

/// Status channel writing one line per update.
struct TerminalStatus<W> {
    out: W,
    last: Option<String>,
}

impl<W: Write> TerminalStatus<W> {
    fn new(out: W) -> Self {
        Self { out, last: None }
    }
}

impl<W: Write + Send> Status for TerminalStatus<W> {
    fn update(&mut self, message: &str) {
        let _ = writeln!(self.out, "» {message}");
        self.last = Some(message.to_owned());
    }

    fn close(&mut self) {
        if self.last.take().is_some() {
            let _ = self.out.flush();
        }
    }
}
