use doomtok::diagnostics::source_map::{SourceMap, SourcePos};
use doomtok::lex;

#[test]
fn offsets_map_to_lines_and_columns() {
    let source = "numMeshes 5\njoints {\n  \"origin\" -1\n}";
    let map = SourceMap::from_source(source);

    assert_eq!(map.line_count(), 4);
    assert_eq!(map.byte_to_pos(source, 0), SourcePos { line: 1, col: 1 });
    assert_eq!(map.byte_to_pos(source, 10), SourcePos { line: 1, col: 11 });
    assert_eq!(map.byte_to_pos(source, 12), SourcePos { line: 2, col: 1 });
    assert_eq!(map.line_text(source, 3), Some("  \"origin\" -1"));
    assert_eq!(map.line_text(source, 4), Some("}"));
    assert_eq!(map.line_text(source, 5), None);
}

#[test]
fn token_spans_resolve_to_positions() {
    let source = "joints {\n  \"origin\" -1\n}";
    let map = SourceMap::from_source(source);
    let tokens = lex(source).expect("lexing should succeed");

    let origin = &tokens[2];
    assert_eq!(origin.text, "origin");
    assert_eq!(map.byte_to_pos(source, origin.span.start).to_string(), "2:3");
}

#[test]
fn columns_count_characters() {
    let source = "/* 骨骼 */ \"open";
    let err = lex(source).expect_err("lexing should fail");
    let map = SourceMap::from_source(source);
    assert_eq!(map.byte_to_pos(source, err.offset()), SourcePos { line: 1, col: 10 });
}
