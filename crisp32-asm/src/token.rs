//! Line lexing: whitespace/comma tokenization, comments, label prefixes.

pub const MAX_LABEL_LEN: usize = 64;

/// Everything extracted from one source line: an optional label definition
/// and the mnemonic + operand tokens that follow it (empty if the line was
/// blank, a comment, or a bare label).
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Line {
    pub label: Option<String>,
    pub tokens: Vec<String>,
}

/// Strip a line comment starting at `;` or `#`.
fn strip_comment(line: &str) -> &str {
    let cut = line
        .char_indices()
        .find(|&(_, c)| c == ';' || c == '#')
        .map(|(i, _)| i);
    match cut {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Tokenize a line into mnemonic/operand tokens separated by whitespace
/// and/or commas, after stripping an optional leading `label:` and any
/// trailing comment.
pub fn tokenize(line: &str) -> Line {
    let line = strip_comment(line).trim();
    if line.is_empty() {
        return Line::default();
    }

    let (label, rest) = match split_label(line) {
        Some((label, rest)) => (Some(label), rest),
        None => (None, line),
    };

    let tokens = rest
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    Line { label, tokens }
}

/// If `line` starts with `name:` (name containing neither whitespace nor
/// `:`), split it off and return the remainder.
fn split_label(line: &str) -> Option<(String, &str)> {
    let colon = line.find(':')?;
    let candidate = &line[..colon];
    if candidate.is_empty() || candidate.contains(char::is_whitespace) {
        return None;
    }
    Some((candidate.to_string(), line[colon + 1..].trim_start()))
}
