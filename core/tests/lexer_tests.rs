use doomtok::{Token, TokenKind, Tokenizer, create_token, create_tokenizer, lex};

const JOINTS_FIXTURE: &str = include_str!("fixtures/joints.md5mesh");

const JOINTS_TEXT: [&str; 29] = [
    "numMeshes",
    "5",
    "joints",
    "{",
    "origin",
    "-1",
    "(",
    "0",
    "0",
    "0",
    ")",
    "(",
    "-0.5",
    "+0.5",
    "-0.5",
    ")",
    "Body",
    "0",
    "(",
    "-12.1038131714",
    "0",
    "79.004776001",
    ")",
    "(",
    "-0.5",
    "-0.5",
    "-0.5",
    ")",
    "}",
];

fn token_texts(source: &str) -> Vec<String> {
    lex(source)
        .expect("lexing should succeed")
        .into_iter()
        .map(|t| t.text)
        .collect()
}

fn collect_with(tokenizer: &mut dyn Tokenizer, token: &mut dyn Token) -> Vec<String> {
    let mut texts = Vec::new();
    while tokenizer.get_next_token(token).expect("lexing should succeed") {
        texts.push(token.as_str().to_owned());
    }
    texts
}

#[test]
fn lex_joints_fixture() {
    assert_eq!(token_texts(JOINTS_FIXTURE), JOINTS_TEXT);
}

#[test]
fn lex_joints_fixture_through_factory() {
    let mut tokenizer = create_tokenizer();
    let mut token = create_token();
    tokenizer.set_source(JOINTS_FIXTURE);

    assert_eq!(collect_with(&mut *tokenizer, &mut *token), JOINTS_TEXT);
}

#[test]
fn lex_joints_fixture_kinds() {
    let tokens = lex(JOINTS_FIXTURE).expect("lexing should succeed");
    let kind_of = |text: &str| {
        tokens
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.kind)
            .expect("token should be present")
    };

    assert_eq!(kind_of("numMeshes"), TokenKind::String);
    assert_eq!(kind_of("origin"), TokenKind::String);
    assert_eq!(kind_of("{"), TokenKind::String);
    assert_eq!(kind_of("5"), TokenKind::Number);
    assert_eq!(kind_of("79.004776001"), TokenKind::Number);
}

#[test]
fn exhausted_tokenizer_stays_exhausted() {
    let mut tokenizer = create_tokenizer();
    let mut token = tokenizer.create_token();
    tokenizer.set_source("a b");

    assert!(tokenizer.get_next_token(&mut *token).unwrap());
    assert!(tokenizer.get_next_token(&mut *token).unwrap());
    for _ in 0..3 {
        assert!(!tokenizer.get_next_token(&mut *token).unwrap());
        assert_eq!(token.kind(), TokenKind::None);
        assert_eq!(token.as_str(), "");
    }
}

#[test]
fn reset_rescans_identically() {
    let mut tokenizer = create_tokenizer();
    let mut token = create_token();
    tokenizer.set_source(JOINTS_FIXTURE);

    let first = collect_with(&mut *tokenizer, &mut *token);
    tokenizer.reset();
    let second = collect_with(&mut *tokenizer, &mut *token);

    assert_eq!(first, second);
    assert_eq!(tokenizer.source(), JOINTS_FIXTURE);
}

#[test]
fn set_source_replaces_and_rewinds() {
    let mut tokenizer = create_tokenizer();
    let mut token = create_token();
    tokenizer.set_source("first second");
    assert!(tokenizer.get_next_token(&mut *token).unwrap());
    assert!(token.is_string("first"));

    tokenizer.set_source("third");
    assert_eq!(tokenizer.position(), 0);
    assert_eq!(collect_with(&mut *tokenizer, &mut *token), vec!["third"]);
}

#[test]
fn numeric_literals() {
    for (literal, expected) in [
        ("-0.5", -0.5),
        ("+0.5", 0.5),
        ("3.", 3.0),
        (".14", 0.14),
        ("-12.1038131714", -12.1038131714),
        ("-.25", -0.25),
        ("42", 42.0),
    ] {
        let tokens = lex(literal).expect("lexing should succeed");
        assert_eq!(tokens.len(), 1, "{literal}");
        assert_eq!(tokens[0].kind, TokenKind::Number, "{literal}");
        assert_eq!(tokens[0].value, Some(expected), "{literal}");
        assert_eq!(tokens[0].text, literal);
    }
}

#[test]
fn number_stops_at_second_decimal_point() {
    assert_eq!(token_texts("1.2.3"), vec!["1.2", ".3"]);
}

#[test]
fn number_at_end_of_source_is_not_rescanned() {
    assert_eq!(token_texts("12"), vec!["12"]);
    assert_eq!(token_texts("x 12"), vec!["x", "12"]);
}

#[test]
fn adjacent_signed_numbers_split() {
    assert_eq!(token_texts("-0.5-0.5-0.5"), vec!["-0.5", "-0.5", "-0.5"]);
    assert_eq!(token_texts("1+2"), vec!["1", "+2"]);
}

#[test]
fn sign_without_digit_is_bareword() {
    let tokens = lex("- -- +. -x").expect("lexing should succeed");
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["-", "--", "+.", "-x"]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::String));
}

#[test]
fn number_followed_by_letters_splits() {
    let tokens = lex("5abc").expect("lexing should succeed");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].text, "abc");
    assert_eq!(tokens[1].kind, TokenKind::String);
}

#[test]
fn quoted_literal_strips_quotes() {
    let mut tokenizer = create_tokenizer();
    let mut token = create_token();
    tokenizer.set_source("\"origin\"");

    assert!(tokenizer.get_next_token(&mut *token).unwrap());
    assert_eq!(token.kind(), TokenKind::String);
    assert_eq!(token.as_str(), "origin");
    assert!(token.is_string("origin"));
    assert!(!token.is_string("Origin"));
    assert!(!token.is_string("origin "));
}

#[test]
fn single_quotes_and_embedded_other_quote() {
    assert_eq!(token_texts("'it\"s' \"don't\""), vec!["it\"s", "don't"]);
}

#[test]
fn quoted_literal_keeps_whitespace_and_comment_markers() {
    assert_eq!(
        token_texts("shader \"models/a b // c /* d\""),
        vec!["shader", "models/a b // c /* d"]
    );
}

#[test]
fn empty_quoted_literal() {
    let tokens = lex("\"\"").expect("lexing should succeed");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "");
}

#[test]
fn line_comment_is_dropped() {
    assert_eq!(token_texts("alpha\n// origin\nbeta"), vec!["alpha", "beta"]);
}

#[test]
fn line_comment_at_end_of_source() {
    assert_eq!(token_texts("alpha // no newline"), vec!["alpha"]);
}

#[test]
fn block_comments_are_dropped() {
    assert_eq!(
        token_texts("a /* one */ b /**/ c /* multi\n * line\n */ d"),
        vec!["a", "b", "c", "d"]
    );
}

#[test]
fn only_whitespace_and_comments_yield_nothing() {
    assert!(token_texts("  \t\n // x\n /* y */ \n").is_empty());
    assert!(token_texts("").is_empty());
}

#[test]
fn punctuation_touching_text_is_absorbed() {
    assert_eq!(token_texts("joints{ (0 )"), vec!["joints{", "(0", ")"]);
}

#[test]
fn slash_alone_is_bareword() {
    assert_eq!(token_texts("a / b"), vec!["a", "/", "b"]);
}

#[test]
fn non_ascii_text_survives() {
    assert_eq!(token_texts("\"骨骼\" bindPose"), vec!["骨骼", "bindPose"]);
}

#[test]
fn spans_point_into_source() {
    let source = "numMeshes  5 \"origin\"";
    let tokens = lex(source).expect("lexing should succeed");

    assert_eq!((tokens[0].span.start, tokens[0].span.end), (0, 9));
    assert_eq!((tokens[1].span.start, tokens[1].span.end), (11, 12));
    assert_eq!((tokens[2].span.start, tokens[2].span.end), (13, 21));
    assert_eq!(&source[tokens[2].span.start..tokens[2].span.end], "\"origin\"");
}

#[test]
fn snapshot_serializes_to_json() {
    let tokens = lex("mesh 2").expect("lexing should succeed");
    let json = serde_json::to_value(&tokens).expect("tokens should serialize");

    assert_eq!(json[0]["kind"], "string");
    assert_eq!(json[0]["text"], "mesh");
    assert!(json[0].get("value").is_none());
    assert_eq!(json[1]["kind"], "number");
    assert_eq!(json[1]["value"], 2.0);
    assert_eq!(json[1]["span"]["start"], 5);
}
