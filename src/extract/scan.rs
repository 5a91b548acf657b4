// src/extract/scan.rs
// =============================================================================
// Walks a token stream and produces report lines.
//
// State: a single "matched" flag.
// - A start tag sets it to (tag name == mode's tag). A matched tag emits a
//   Link line right away.
// - The next text token emits a Name line if the flag is set, and always
//   clears the flag.
// - Other tokens leave the flag alone.
//
// So only the text node immediately after a matched tag becomes its name.
// `<a href="/x"><span>Hi</span></a>` gets a Link but no Name, because the
// <span> start tag resets the flag before "Hi" arrives.
// =============================================================================

use std::fmt;

use crate::extract::{Mode, Token};

/// One line of a report, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Link(String),
    Name(String),
}

impl fmt::Display for ReportLine {
    // Name lines carry a trailing blank line that visually groups
    // each link with its name in the report file
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Link(link) => write!(f, "Link: {}", link),
            ReportLine::Name(name) => writeln!(f, "Name: {}", name),
        }
    }
}

// Scans tokens for the mode's tag
//
// Parameters:
//   tokens: any token sequence (usually from tokenize())
//   mode: which tag/attribute to look for
//   host: hostname used to prefix relative values
//
// Returns: report lines, one Link per matched tag plus its Name if any
pub fn scan_tokens<I>(tokens: I, mode: Mode, host: &str) -> Vec<ReportLine>
where
    I: IntoIterator<Item = Token>,
{
    let mut lines = Vec::new();
    let mut matched = false;

    for token in tokens {
        match &token {
            Token::StartTag { name, .. } => {
                matched = name == mode.tag();

                if matched {
                    // A missing attribute behaves like an empty one
                    let value = token.attr(mode.attr()).unwrap_or("");
                    lines.push(ReportLine::Link(resolve_value(value, host)));
                }
            }
            Token::Text(text) => {
                if matched {
                    lines.push(ReportLine::Name(text.trim().to_string()));
                }
                matched = false;
            }
            Token::Other => {}
        }
    }

    lines
}

// Turns an attribute value into the text of a Link line
//
// Anything mentioning "http" is taken as absolute and kept verbatim.
// Everything else is glued onto the hostname. This is plain string
// concatenation: no "../" handling, queries and fragments are kept as-is.
//
// Examples:
//   ("https://cdn.example.com/x.png", "example.com") -> "https://cdn.example.com/x.png"
//   ("/about", "example.com")                         -> "example.com/about"
//   ("docs/intro", "example.com")                     -> "example.com/docs/intro"
fn resolve_value(value: &str, host: &str) -> String {
    if value.contains("http") {
        return value.to_string();
    }

    let path = value.strip_prefix('/').unwrap_or(value);
    format!("{}/{}", host, path)
}
