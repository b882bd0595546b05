mod interactive;
mod loader;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use psalm_core::{ContentTable, QuestionStyle, QuizGenerator, QuizSession};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(name = "psalm", about = "Psalm memorization quizzes")]
struct Cli {
    /// Content table (TOML or JSON) merged over the built-in one.
    /// Defaults to $PSALM_CONTENT when set.
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Ignore the built-in content table
    #[arg(long, global = true)]
    no_builtin: bool,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DeckArgs {
    /// Verse file (TOML)
    #[arg(long)]
    verses: PathBuf,

    /// fill-blank, multiple-choice, word-order, verse-completion or mixed
    #[arg(long, default_value = "mixed")]
    style: QuestionStyle,

    /// Seed for a reproducible deck
    #[arg(long)]
    seed: Option<u64>,

    /// First verse to include
    #[arg(long)]
    from: Option<u32>,

    /// Last verse to include
    #[arg(long)]
    to: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a generated deck as JSON
    Generate {
        #[command(flatten)]
        deck: DeckArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Take a quiz interactively on stdin
    Quiz {
        #[command(flatten)]
        deck: DeckArgs,
    },

    /// Validate a content table and show its size
    CheckContent,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn content_path(cli: &Cli) -> Option<PathBuf> {
    cli.content.clone().or_else(|| {
        std::env::var("PSALM_CONTENT")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    })
}

fn open_content(cli: &Cli) -> Result<ContentTable> {
    loader::load_content(content_path(cli).as_deref(), cli.no_builtin)
        .context("failed to load content table")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Generate { deck, pretty } => cmd_generate(&cli, deck, *pretty),
        Commands::Quiz { deck } => cmd_quiz(&cli, deck),
        Commands::CheckContent => cmd_check_content(&cli),
    }
}

fn build_deck(cli: &Cli, args: &DeckArgs) -> Result<Vec<psalm_core::Question>> {
    let content = open_content(cli)?;
    let verses = loader::load_verses(&args.verses, args.from, args.to)
        .context("failed to load verses")?;
    if verses.is_empty() {
        tracing::warn!(
            "no verses selected from {}, the deck will hold the fallback question",
            args.verses.display()
        );
    }

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    Ok(QuizGenerator::new(&content).generate(&verses, args.style, &mut rng))
}

fn cmd_generate(cli: &Cli, args: &DeckArgs, pretty: bool) -> Result<()> {
    let deck = build_deck(cli, args)?;
    let json = if pretty {
        serde_json::to_string_pretty(&deck)
    } else {
        serde_json::to_string(&deck)
    }
    .context("failed to serialize deck")?;
    println!("{json}");
    Ok(())
}

fn cmd_quiz(cli: &Cli, args: &DeckArgs) -> Result<()> {
    let deck = build_deck(cli, args)?;
    let mut session = QuizSession::new(deck);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let summary = interactive::run_quiz(&mut session, stdin.lock(), &mut stdout)?;
    tracing::info!(
        "quiz finished: {}/{} correct, {} answered",
        summary.correct,
        summary.total,
        summary.answered
    );
    Ok(())
}

fn cmd_check_content(cli: &Cli) -> Result<()> {
    let path = content_path(cli);
    let table = open_content(cli)?;
    table.validate().context("content table failed validation")?;

    let source = match (path.as_deref(), cli.no_builtin) {
        (Some(p), _) => p.display().to_string(),
        (None, false) => "built-in".to_string(),
        (None, true) => "none".to_string(),
    };
    println!("source:      {source}");
    println!("meanings:    {}", table.meanings.len());
    println!("themes:      {}", table.themes.len());
    println!("completions: {}", table.completions.len());
    Ok(())
}
