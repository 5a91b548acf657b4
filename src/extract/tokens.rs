// src/extract/tokens.rs
// =============================================================================
// This module turns an HTML page into a sequence of markup tokens.
//
// We use html5ever's tokenizer (the lexer underneath the `scraper` crate)
// on its own, without the tree builder. That matters: the tree builder
// repairs broken markup by cloning unclosed <a> elements and moving table
// content around, so a DOM walk can show tags that are not in the file, or
// show them out of order. The tokenizer reports exactly what is written,
// in the order it is written.
//
// We emit:
// - StartTag for every opening tag, with its attributes
// - Text for every run of characters between tags (entities decoded)
// - Other for comments and doctypes
//
// End tags are dropped because nothing downstream reacts to them. The end
// of the Vec is the end of input.
// =============================================================================

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token as HtmlToken, TokenSink, TokenSinkResult, Tokenizer,
    TokenizerOpts,
};

/// One token of markup, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An opening tag such as `<a href="/about">`
    StartTag {
        name: String,
        attrs: Vec<(String, String)>,
    },
    /// The text between tags, untrimmed
    Text(String),
    /// Anything we ignore (comments, doctype, ...)
    Other,
}

impl Token {
    #[cfg(test)]
    pub fn start(name: &str, attrs: &[(&str, &str)]) -> Token {
        Token::StartTag {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Looks up an attribute on a start tag. The first match wins.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Token::StartTag { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

// Receives tokens from html5ever and collects ours
//
// html5ever may hand one run of text over in several pieces (around
// entities, for example), so characters are buffered in `text` and only
// become a Token::Text once something else arrives.
#[derive(Default)]
struct Collector {
    tokens: Vec<Token>,
    text: String,
}

impl Collector {
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(Token::Text(std::mem::take(&mut self.text)));
        }
    }
}

impl TokenSink for Collector {
    type Handle = ();

    fn process_token(&mut self, token: HtmlToken, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            HtmlToken::CharacterTokens(chars) => {
                self.text.push_str(&chars);
            }
            HtmlToken::NullCharacterToken => {
                self.text.push('\0');
            }
            // Parse errors are diagnostics, not markup
            HtmlToken::ParseError(_) => {}
            HtmlToken::TagToken(tag) => {
                self.flush_text();

                if tag.kind == TagKind::StartTag {
                    let name = tag.name.to_string();
                    let raw = if tag.self_closing { None } else { raw_kind(&name) };

                    self.tokens.push(Token::StartTag {
                        name,
                        attrs: tag
                            .attrs
                            .iter()
                            .map(|a| (a.name.local.to_string(), a.value.to_string()))
                            .collect(),
                    });

                    if let Some(kind) = raw {
                        return TokenSinkResult::RawData(kind);
                    }
                }
            }
            HtmlToken::CommentToken(_) | HtmlToken::DoctypeToken(_) => {
                self.flush_text();
                self.tokens.push(Token::Other);
            }
            HtmlToken::EOFToken => {
                self.flush_text();
            }
        }

        TokenSinkResult::Continue
    }
}

// Elements whose content is text, not markup
//
// Without a tree builder nobody tells the tokenizer to switch modes, so
// `<script>if (a<b)...</script>` would otherwise turn into bogus tags.
fn raw_kind(name: &str) -> Option<RawKind> {
    match name {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => Some(RawKind::Rawtext),
        "textarea" | "title" => Some(RawKind::Rcdata),
        _ => None,
    }
}

// Tokenizes HTML content
//
// Parameters:
//   markup: the raw page content (borrowed as &str)
//
// Returns: Vec<Token> in the order the tags appear in the file
//
// Example:
//   markup = "<a href='/docs'>Docs</a>"
//   result = [StartTag a {href: /docs}, Text "Docs"]
pub fn tokenize(markup: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(Collector::default(), TokenizerOpts::default());

    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(markup));

    // Our sink never asks to pause for a script, so feed runs to the end
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    let mut collector = tokenizer.sink;
    collector.flush_text();
    collector.tokens
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a TokenSink?
//    - html5ever's tokenizer pushes every token it finds into a "sink"
//    - We implement the TokenSink trait so that sink is our Collector
//    - The return value can steer the tokenizer (RawData switches modes)
//
// 2. What is a tendril?
//    - html5ever's own string type (StrTendril), cheap to slice and share
//    - It derefs to &str, so push_str(&chars) just works
//
// 3. Why std::mem::take?
//    - Moves the buffered String out and leaves an empty one behind
//    - No clone needed
// -----------------------------------------------------------------------------
