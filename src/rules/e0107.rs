//! E0107 nonexistent-operator: a mistyped compound-assignment operator written backwards
//! (`x =+ 1` meaning `x += 1`, `x =- 1` meaning `x -= 1`). This is purely a lexical mistake —
//! both spellings parse to a perfectly valid (but almost certainly unintended) assignment of
//! a unary expression — so it is the one rule in this registry that scans raw source text
//! instead of the tree, the same way the reference linter's tokenizer-based check does.

use crate::position::{Position, Range};
use crate::registry::{Diagnostic, Rule};

const SUSPECTS: [&str; 4] = ["=+", "=-", "=!", "=~"];

pub fn check(source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (line_no, line) in source.lines().enumerate() {
        let bytes = line.as_bytes();
        for (col, _) in line.char_indices() {
            for suspect in SUSPECTS {
                if line[col..].starts_with(suspect) {
                    // Skip real operators that merely contain these two characters, e.g.
                    // `==`, `!=`, `>=`; only flag a bare `=` followed by the suspect char
                    // that isn't itself preceded by a comparison/assignment character.
                    let prev = if col == 0 { None } else { Some(bytes[col - 1] as char) };
                    if matches!(prev, Some('=' | '!' | '<' | '>' | '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^')) {
                        continue;
                    }
                    let pos = Position::new(line_no + 1, col);
                    diagnostics.push(Diagnostic::new(
                        Rule::NonexistentOperator,
                        format!("`{suspect}` is not a valid operator; did you mean `{}{}` or a space before `=`?", &suspect[1..], &suspect[..1]),
                        Range::new(pos, pos),
                    ));
                }
            }
        }
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_reversed_compound_assignment() {
        let found = check("x =+ 1\n");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn does_not_flag_real_operators() {
        assert!(check("x += 1\nx == 1\nx != 1\n").is_empty());
    }
}
