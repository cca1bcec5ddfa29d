use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use doomtok::diagnostics::source_map::SourceMap;
use doomtok::{LexError, LexerOptions, OwnedToken, TokenKind};
use owo_colors::OwoColorize;

mod logging;
mod repl;

#[derive(Parser)]
#[command(name = "doomtok", about = "Tokenizer for Doom3-style declaration files")]
struct Cli {
    /// Path to a .md5mesh, .md5anim or decl file to tokenize
    file: Option<PathBuf>,
    /// Tokenize inline source text
    #[arg(long)]
    eval: Option<String>,
    /// Print the token stream as JSON
    #[arg(long)]
    json: bool,
    /// Split ( ) [ ] { } , into their own tokens even without surrounding whitespace
    #[arg(long)]
    split_punctuation: bool,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if cli.version {
        println!(
            "{} {}",
            "doomtok".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let options = LexerOptions::default().with_split_special_chars(cli.split_punctuation);

    if cli.file.is_none() && cli.eval.is_none() {
        if let Err(err) = repl::run(options) {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
        return;
    }

    let (source, source_path) = if let Some(code) = cli.eval {
        (code, PathBuf::from("<eval>"))
    } else {
        let file = cli.file.expect("checked above");
        match fs::read_to_string(&file) {
            Ok(s) => (s, file),
            Err(e) => {
                eprintln!(
                    "{} could not read '{}': {e}",
                    "error:".red().bold(),
                    file.display().yellow()
                );
                process::exit(1);
            }
        }
    };

    let tokens = match doomtok::lex_with(&source, options) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", format_lex_error(&source, &source_path, &err));
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
        }
    } else {
        print_tokens(&source, &tokens);
    }
}

pub(crate) fn print_tokens(source: &str, tokens: &[OwnedToken]) {
    let map = SourceMap::from_source(source);
    for token in tokens {
        let pos = map.byte_to_pos(source, token.span.start);
        let kind = match token.kind {
            TokenKind::Number => format!("{:<6}", token.kind).cyan().to_string(),
            TokenKind::String => format!("{:<6}", token.kind).green().to_string(),
            TokenKind::None => format!("{:<6}", token.kind),
        };
        println!(
            "{} {} {}",
            kind,
            format!("{:>7}", pos.to_string()).bright_black(),
            token.text
        );
    }
}

pub(crate) fn format_lex_error(source: &str, source_path: &Path, err: &LexError) -> String {
    let map = SourceMap::from_source(source);
    let pos = map.byte_to_pos(source, err.offset());
    let mut out = format!(
        "{} at {}:{}: {}",
        "lex error".red().bold(),
        source_path.display().to_string().cyan(),
        pos,
        err.to_string().bright_white()
    );
    if let Some(line) = map.line_text(source, pos.line) {
        out.push_str(&format!("\n  {}\n  {}{}", line, " ".repeat(pos.col - 1), "^".red()));
    }
    out
}
