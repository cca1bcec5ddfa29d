use doomtok::{LexerOptions, TokenKind, lex, lex_with};

fn split_texts(source: &str) -> Vec<String> {
    let options = LexerOptions::default().with_split_special_chars(true);
    lex_with(source, options)
        .expect("lexing should succeed")
        .into_iter()
        .map(|t| t.text)
        .collect()
}

#[test]
fn default_options_keep_classic_behavior() {
    assert!(!LexerOptions::default().split_special_chars);
    let tokens = lex("(-0.5-0.5-0.5)").expect("lexing should succeed");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "(-0.5-0.5-0.5)");
    assert_eq!(tokens[0].kind, TokenKind::String);
}

#[test]
fn split_mode_separates_touching_punctuation() {
    assert_eq!(
        split_texts("(-0.5-0.5-0.5)"),
        vec!["(", "-0.5", "-0.5", "-0.5", ")"]
    );
    assert_eq!(split_texts("joints{}"), vec!["joints", "{", "}"]);
    assert_eq!(split_texts("a,b [c]"), vec!["a", ",", "b", "[", "c", "]"]);
}

#[test]
fn split_mode_leaves_quoted_punctuation_alone() {
    assert_eq!(split_texts("\"(a, b)\""), vec!["(a, b)"]);
}

#[test]
fn split_mode_matches_default_on_spaced_input() {
    let source = include_str!("fixtures/joints.md5mesh");
    let default: Vec<_> = lex(source)
        .expect("lexing should succeed")
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(split_texts(source), default);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: LexerOptions = serde_json::from_str("{}").expect("options should parse");
    assert_eq!(options, LexerOptions::default());

    let options: LexerOptions =
        serde_json::from_str(r#"{"split_special_chars": true}"#).expect("options should parse");
    assert!(options.split_special_chars);
}
