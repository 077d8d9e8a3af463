//! JSON renderer: a single `{"issues": [...]}` document, ordering identical to the text
//! renderer, serializing a `Vec` of per-diagnostic records with `serde_json`.

use serde::Serialize;

use super::Message;

#[derive(Serialize)]
struct Issue<'a> {
    code: &'a str,
    message: &'a str,
    file: String,
    line: usize,
    column: usize,
    severity: &'a str,
    symbol: &'a str,
}

#[derive(Serialize)]
struct Document<'a> {
    issues: Vec<Issue<'a>>,
}

pub fn render(messages: &[Message]) -> serde_json::Result<String> {
    let issues = messages
        .iter()
        .map(|message| {
            let rule = message.diagnostic.rule();
            Issue {
                code: rule.code(),
                message: &message.diagnostic.kind.message,
                file: message.file.display().to_string(),
                line: message.diagnostic.range.start.line,
                column: message.diagnostic.range.start.column,
                severity: rule.severity().as_str(),
                symbol: rule.symbol(),
            }
        })
        .collect();
    serde_json::to_string_pretty(&Document { issues })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{Position, Range};
    use crate::registry::{Diagnostic, Rule};

    #[test]
    fn wraps_issues_in_a_single_document() {
        let message = Message::new(
            "foo.py".into(),
            Diagnostic::new(Rule::DuplicateKey, "duplicate key", Range::new(Position::new(1, 0), Position::new(1, 1))),
        );
        let rendered = render(&[message]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["issues"][0]["code"], "E0109");
        assert_eq!(value["issues"][0]["severity"], "error");
    }
}
