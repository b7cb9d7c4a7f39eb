//! Multi-Wordle - CLI
//!
//! Guess a secret sentence of five-letter words in a TUI or plain text mode.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use multiwordle::{
    commands::run_simple,
    core::{Secret, Word},
    game::SharedGame,
    wordlists::{ANSWERS, loader::words_from_slice, random_secret},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "multiwordle",
    about = "Multi-word Wordle: guess a whole sentence of five-letter words at once",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret sentence: whitespace-separated five-letter words, e.g. "apple mango"
    #[arg(short, long, global = true, conflicts_with = "random")]
    secret: Option<String>,

    /// Draw a random secret of this many words instead of --secret
    #[arg(short, long, global = true)]
    random: Option<usize>,

    /// Pool for --random: 'embedded' (default) or path to a word list file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Log game events to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load the pool of words that random secrets are drawn from
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use multiwordle::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(ANSWERS)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

/// Resolve the secret from the command line
///
/// Any problem here is fatal: the game never starts with a malformed secret.
fn load_secret(cli: &Cli) -> Result<Secret> {
    match (&cli.secret, cli.random) {
        (Some(text), _) => Secret::parse(text).context("invalid --secret"),
        (None, Some(count)) => {
            let pool = load_wordlist(&cli.wordlist)?;
            if count > pool.len() {
                bail!(
                    "--random {count} needs {count} distinct words, but the word list has {}",
                    pool.len()
                );
            }
            random_secret(&pool, count, &mut rand::rng()).context("invalid --random")
        }
        (None, None) => {
            bail!("no secret given: pass --secret \"WORD1 WORD2 ...\" or --random <COUNT>")
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let secret = load_secret(&cli)?;
    let game = SharedGame::new(secret);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(game),
        Commands::Simple => run_simple(&game).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(game: SharedGame) -> Result<()> {
    use multiwordle::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}
