//! Splits a console input line into command and argument tokens.
//!
//! Rules:
//! - whitespace outside quotes separates tokens and never appears in one;
//! - a double-quoted span is exactly one token, quotes stripped, even when
//!   it contains whitespace or is empty;
//! - a quote glued to other text still opens or closes a span, so
//!   `foo"bar baz"` yields `foo` and `bar baz`;
//! - an unterminated quote captures everything up to the end of the line.
//!
//! Tokenizing never fails.

const QUOTE: char = '"';

/// Tokenizes one input line. An empty or whitespace-only line yields no tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        if in_quotes {
            if ch == QUOTE {
                tokens.push(std::mem::take(&mut current));
                in_quotes = false;
            } else {
                current.push(ch);
            }
            continue;
        }

        if ch == QUOTE {
            if in_word {
                tokens.push(std::mem::take(&mut current));
                in_word = false;
            }
            in_quotes = true;
        } else if ch.is_whitespace() {
            if in_word {
                tokens.push(std::mem::take(&mut current));
                in_word = false;
            }
        } else {
            current.push(ch);
            in_word = true;
        }
    }

    if in_quotes || in_word {
        tokens.push(current);
    }

    tokens
}

/// A tokenized line: the command name and its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Tokenizes `line`; `None` when there is nothing to dispatch.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = tokenize(line).into_iter();
        let command = tokens.next()?;
        Some(Self {
            command,
            args: tokens.collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        tokenize(line)
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokens("test arg1 arg2"), vec!["test", "arg1", "arg2"]);
    }

    #[test]
    fn quoted_span_is_one_token() {
        assert_eq!(tokens(r#"cmd "foo bar" baz"#), vec!["cmd", "foo bar", "baz"]);
    }

    #[test]
    fn empty_line_yields_nothing() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn whitespace_only_line_yields_nothing() {
        assert!(tokens("   \t  ").is_empty());
    }

    #[test]
    fn repeated_and_surrounding_whitespace_is_dropped() {
        assert_eq!(tokens("  hello \t  a   b  "), vec!["hello", "a", "b"]);
    }

    #[test]
    fn adjacent_quoted_spans_stay_separate() {
        assert_eq!(tokens(r#"say "a b" "c d""#), vec!["say", "a b", "c d"]);
    }

    #[test]
    fn empty_quotes_yield_empty_token() {
        assert_eq!(tokens(r#"prompt """#), vec!["prompt", ""]);
    }

    #[test]
    fn quote_glued_to_word_starts_new_token() {
        assert_eq!(tokens(r#"foo"bar baz""#), vec!["foo", "bar baz"]);
        assert_eq!(tokens(r#""bar baz"foo"#), vec!["bar baz", "foo"]);
    }

    #[test]
    fn unterminated_quote_runs_to_end_of_line() {
        assert_eq!(tokens(r#"say "hi there"#), vec!["say", "hi there"]);
        assert_eq!(tokens(r#"say ""#), vec!["say", ""]);
    }

    #[test]
    fn quoted_whitespace_is_preserved() {
        assert_eq!(tokens(r#"prompt "  > ""#), vec!["prompt", "  > "]);
    }

    #[test]
    fn non_ascii_text() {
        assert_eq!(tokens("hello wörld \"ça va\""), vec!["hello", "wörld", "ça va"]);
    }

    #[test]
    fn command_line_splits_command_and_args() {
        let parsed = CommandLine::parse(r#"hello "big world" again"#).unwrap();
        assert_eq!(parsed.command, "hello");
        assert_eq!(parsed.args, vec!["big world", "again"]);

        assert!(CommandLine::parse("  ").is_none());
    }
}
