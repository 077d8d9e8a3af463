//! Plain-text renderer: one diagnostic per line, byte-for-byte stable across runs. No
//! source-excerpt or color machinery — just the single fixed line format, not a configurable
//! pretty-printer.

use std::fmt::Write as _;

use super::Message;

pub fn render(messages: &[Message]) -> String {
    let mut out = String::new();
    for message in messages {
        writeln!(
            out,
            "{}:{}:{}: {}: {} ({})",
            message.file.display(),
            message.diagnostic.range.start.line,
            message.diagnostic.range.start.column,
            message.diagnostic.rule().code(),
            message.diagnostic.kind.message,
            message.diagnostic.rule().symbol(),
        )
        .expect("writing to a String never fails");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{Position, Range};
    use crate::registry::{Diagnostic, Rule};

    #[test]
    fn formats_one_line_per_diagnostic() {
        let message = Message::new(
            "foo.py".into(),
            Diagnostic::new(Rule::UndefinedVariable, "undefined variable 'y'", Range::new(Position::new(3, 4), Position::new(3, 5))),
        );
        let rendered = render(&[message]);
        assert_eq!(rendered, "foo.py:3:4: E0602: undefined variable 'y' (undefined-variable)\n");
    }
}
