mod completer;
mod helper;
mod highlighter;

use std::fs;
use std::path::Path;

use doomtok::{LexError, LexerOptions};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;

/// Interactive inspector: every entered snippet is tokenized and printed.
pub fn run(mut options: LexerOptions) -> Result<(), ReadlineError> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper));

    println!(
        "{} {}",
        "doomtok".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match handle_command(trimmed, &mut options) {
                    Command::Exit => break,
                    Command::Handled => continue,
                    Command::NotACommand => tokenize_snippet(&line, options, Path::new("<repl>")),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

enum Command {
    Exit,
    Handled,
    NotACommand,
}

fn handle_command(trimmed: &str, options: &mut LexerOptions) -> Command {
    if trimmed == ".exit" || trimmed == "exit" {
        return Command::Exit;
    }
    if trimmed == ".help" {
        println!("{}", ".help                show commands".bright_blue());
        println!("{}", ".load <file>         tokenize a file".bright_blue());
        println!(
            "{}",
            ".split               toggle punctuation splitting".bright_blue()
        );
        println!("{}", ".exit                exit".bright_blue());
        return Command::Handled;
    }
    if trimmed == ".split" {
        options.split_special_chars = !options.split_special_chars;
        let state = if options.split_special_chars { "on" } else { "off" };
        println!("{} {}", "punctuation splitting".green(), state.bold());
        return Command::Handled;
    }
    if let Some(path) = trimmed.strip_prefix(".load ") {
        let path = Path::new(path.trim());
        match fs::read_to_string(path) {
            Ok(source) => tokenize_snippet(&source, *options, path),
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        }
        return Command::Handled;
    }
    Command::NotACommand
}

fn tokenize_snippet(source: &str, options: LexerOptions, path: &Path) {
    match doomtok::lex_with(source, options) {
        Ok(tokens) => crate::print_tokens(source, &tokens),
        Err(err) => eprintln!("{}", crate::format_lex_error(source, path, &err)),
    }
}

/// Keep reading lines while a quoted string or block comment is still open.
pub fn needs_more_input(source: &str) -> bool {
    matches!(
        doomtok::lex(source),
        Err(LexError::UnterminatedString { .. } | LexError::UnterminatedComment { .. })
    )
}

#[cfg(test)]
mod tests {
    use super::needs_more_input;

    #[test]
    fn open_block_comment_needs_more_input() {
        assert!(needs_more_input("joints { /* bind pose"));
        assert!(!needs_more_input("joints { /* bind pose */"));
    }

    #[test]
    fn open_quote_needs_more_input() {
        assert!(needs_more_input("shader \"models/monsters/imp"));
        assert!(!needs_more_input("shader \"models/monsters/imp\""));
    }

    #[test]
    fn plain_line_is_complete() {
        assert!(!needs_more_input("numMeshes 5"));
        assert!(!needs_more_input("// only a comment"));
    }
}
