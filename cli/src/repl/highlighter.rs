use std::borrow::Cow;

use doomtok::TokenKind;
use owo_colors::OwoColorize;

/// Color numbers and quoted strings using the tokenizer's own spans. Lines
/// that do not tokenize yet are left alone.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let Ok(tokens) = doomtok::lex(line) else {
        return Cow::Borrowed(line);
    };

    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for token in &tokens {
        let (Some(gap), Some(text)) = (
            line.get(last..token.span.start),
            line.get(token.span.start..token.span.end),
        ) else {
            continue;
        };
        out.push_str(gap);
        match token.kind {
            TokenKind::Number => out.push_str(&text.cyan().to_string()),
            TokenKind::String if text.starts_with(['"', '\'']) => {
                out.push_str(&text.green().to_string())
            }
            _ => out.push_str(text),
        }
        last = token.span.end;
    }
    out.push_str(line.get(last..).unwrap_or_default());
    Cow::Owned(out)
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}
