mod debug_report;

use clap::Parser;
use libris::{KnowledgeBase, Param, Query, respond_verbose_with, respond_with, webhook};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Book recommender fulfillment engine.
///
/// Answers one request for a named intent, or a whole webhook request read
/// from stdin.
#[derive(Parser, Debug)]
#[command(name = "libris", version, about, after_help = EXIT_CODES)]
struct Cli {
    /// Intent display name, e.g. "BookInformationIntent".
    #[arg(short = 'I', long, required_unless_present = "webhook")]
    intent: Option<String>,

    /// Extracted parameter (author, book_title, book_info, genre, length, rated).
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    params: Vec<(Param, String)>,

    /// Read a webhook request JSON from stdin and print the response JSON.
    #[arg(long, conflicts_with_all = ["intent", "params", "verbose", "text"])]
    webhook: bool,

    /// Load the knowledge base from a JSON file instead of the built-in one.
    #[arg(long, value_name = "PATH", env = "LIBRIS_KNOWLEDGE")]
    knowledge: Option<PathBuf>,

    /// Print the lookup trace, selected rule and timing.
    #[arg(short, long)]
    verbose: bool,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,

    /// Raw user utterance. Read from stdin when omitted and stdin is not a terminal.
    #[arg(trailing_var_arg = true)]
    text: Vec<String>,
}

const EXIT_CODES: &str = "Exit codes:
  0  Success.
  1  Runtime error (unknown intent, bad knowledge base, malformed request).
  2  Invalid arguments.";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("LIBRIS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let loaded;
    let kb = match &cli.knowledge {
        Some(path) => {
            loaded = KnowledgeBase::from_path(path)?;
            &loaded
        }
        None => KnowledgeBase::builtin(),
    };

    if cli.webhook {
        let body = read_stdin()?;
        let response = webhook::handle(&body, kb)?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let Some(intent) = cli.intent.as_deref() else {
        return Err("an intent is required".into());
    };

    let text = if cli.text.is_empty() && !io::stdin().is_terminal() {
        read_stdin()?.trim().to_string()
    } else {
        cli.text.join(" ")
    };

    let mut query = Query::new(text);
    for (param, value) in &cli.params {
        query.params.set(*param, value.as_str());
    }

    if cli.verbose {
        let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };
        let res = respond_verbose_with(intent, &query, kb)?;
        debug_report::print_run(&query, &res, color);
    } else {
        let reply = respond_with(intent, &query, kb)?;
        println!("{}", reply.text());
    }

    Ok(())
}

fn parse_param(arg: &str) -> Result<(Param, String), String> {
    let (name, value) = arg.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, got '{arg}'"))?;
    Ok((name.trim().parse()?, value.to_string()))
}

fn read_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn params_split_on_the_first_equals_sign() {
        assert_eq!(parse_param("book_info=1984"), Ok((Param::BookInfo, "1984".to_string())));
        assert_eq!(parse_param("genre=a=b"), Ok((Param::Genre, "a=b".to_string())));
        assert!(parse_param("genre").unwrap_err().contains("NAME=VALUE"));
        assert!(parse_param("mood=cozy").unwrap_err().contains("unknown parameter 'mood'"));
    }

    #[test]
    fn trailing_words_form_the_query_text() {
        let cli = Cli::try_parse_from(["libris", "-I", "BookInformationIntent", "-p", "book_info=1984", "who", "wrote", "1984"])
            .unwrap();
        assert_eq!(cli.intent.as_deref(), Some("BookInformationIntent"));
        assert_eq!(cli.text, ["who", "wrote", "1984"]);
        assert_eq!(cli.params, [(Param::BookInfo, "1984".to_string())]);
    }

    #[test]
    fn intent_is_required_outside_webhook_mode() {
        assert!(Cli::try_parse_from(["libris", "hello"]).is_err());
        assert!(Cli::try_parse_from(["libris", "--webhook"]).is_ok());
        assert!(Cli::try_parse_from(["libris", "--webhook", "-I", "Goodbye"]).is_err());
    }
}
