use std::io::{self, Stdout, Write};

use tracing::warn;

/// Host-provided sink for user-visible messages.
///
/// Delivery is fire-and-forget: a sink has no way to report failure back.
pub trait Ui {
    fn message(&mut self, message: &str);
}

/// Collects messages in memory.
impl Ui for Vec<String> {
    fn message(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<T: Ui + ?Sized> Ui for &mut T {
    fn message(&mut self, message: &str) {
        (**self).message(message);
    }
}

/// Writes each message as one line.
#[derive(Debug)]
pub struct WriterUi<W: Write> {
    writer: W,
}

impl<W: Write> WriterUi<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterUi<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Ui for WriterUi<W> {
    fn message(&mut self, message: &str) {
        let result = writeln!(self.writer, "{message}").and_then(|()| self.writer.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to write message");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_collects_messages_in_order() {
        let mut ui: Vec<String> = Vec::new();
        ui.message("one");
        ui.message("two");
        assert_eq!(ui, vec!["one", "two"]);
    }

    #[test]
    fn writer_ui_writes_one_line_per_message() {
        let mut ui = WriterUi::new(Vec::<u8>::new());
        ui.message("a");
        ui.message("b");
        assert_eq!(String::from_utf8(ui.into_inner()).unwrap(), "a\nb\n");
    }
}
