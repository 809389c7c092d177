use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use parley_corpus::{bundled_corpora, read_corpus_path, Corpus, CorpusLoader, LoadStats};
use parley_selector::{BotConfig, ChatBot};
use parley_store::StatementStore;
use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

mod flags;
mod gate;
mod output;

use flags::StrategyFlag;
use gate::Gate;
use output::{ChatRequest, ChatResponse, StatsOutput, TrainOutput};

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Answer messages with the closest known conversational reply", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for replies)
    #[arg(long, global = true)]
    quiet: bool,

    /// Bot configuration file (TOML, overrides PARLEY_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Additional corpus file or directory (repeatable)
    #[arg(long = "corpus", global = true)]
    corpora: Vec<PathBuf>,

    /// Do not load the bundled corpora
    #[arg(long, global = true)]
    no_bundled: bool,

    /// Load the statement store from a snapshot instead of corpora
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Reply used when nothing matches
    #[arg(long, global = true)]
    fallback: Option<String>,

    /// Minimum similarity for fuzzy matches, in [0.0, 1.0)
    #[arg(long, global = true)]
    threshold: Option<f32>,

    /// Similarity strategy
    #[arg(long, global = true, value_enum)]
    strategy: Option<StrategyFlag>,

    /// Store every answered message as a new statement
    #[arg(long, global = true)]
    learn: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single message
    Ask(AskArgs),

    /// Chat line by line on stdin/stdout (`quit` or EOF to leave)
    Chat,

    /// Load corpora and write a statement store snapshot
    Train(TrainArgs),

    /// Show statement store statistics
    Stats(StatsArgs),
}

#[derive(Args)]
struct AskArgs {
    /// Message text (a {"message": ...} envelope with --json)
    message: String,

    /// Read a JSON envelope and print {"response": ...}
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TrainArgs {
    /// Snapshot output path
    #[arg(long)]
    save: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Ask(args) => args.json,
        Commands::Train(args) => args.json,
        Commands::Stats(args) => args.json,
        Commands::Chat => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = resolve_config(&cli).await?;
    let (store, stats) = build_store(&cli).await?;

    let learn = config.learn;
    let snapshot = cli.snapshot.clone();
    if learn && snapshot.is_none() {
        log::warn!("--learn without --snapshot: learned statements are lost on exit");
    }

    match cli.command {
        Commands::Ask(args) => {
            let bot = ChatBot::new(store, config)?;
            run_ask(&bot, args).await?;
            if learn {
                save_learned(&bot, snapshot.as_deref()).await?;
            }
        }
        Commands::Chat => {
            let bot = ChatBot::new(store, config)?;
            run_chat(&bot).await?;
            if learn {
                save_learned(&bot, snapshot.as_deref()).await?;
            }
        }
        Commands::Train(args) => run_train(&store, stats, args).await?,
        Commands::Stats(args) => run_stats(&store, args)?,
    }

    Ok(())
}

async fn resolve_config(cli: &Cli) -> Result<BotConfig> {
    let path = cli
        .config
        .clone()
        .or_else(|| env::var_os("PARLEY_CONFIG").map(PathBuf::from));

    let mut config = match path {
        Some(path) => BotConfig::load(&path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BotConfig::default(),
    };

    if let Some(fallback) = &cli.fallback {
        config.fallback_response = fallback.clone();
    }
    if let Some(threshold) = cli.threshold {
        config.confidence_threshold = threshold;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy.as_domain();
    }
    if cli.learn {
        config.learn = true;
    }

    config.validate().context("Invalid bot configuration")?;
    Ok(config)
}

async fn build_store(cli: &Cli) -> Result<(StatementStore, LoadStats)> {
    if let Some(path) = &cli.snapshot {
        if !cli.corpora.is_empty() {
            log::warn!("--corpus is ignored when --snapshot is given");
        }
        let store = StatementStore::load(path)
            .await
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
        return Ok((store, LoadStats::default()));
    }

    let mut corpora: Vec<Corpus> = if cli.no_bundled {
        Vec::new()
    } else {
        bundled_corpora().context("Bundled corpus is malformed")?
    };
    for path in &cli.corpora {
        let loaded = read_corpus_path(path)
            .await
            .with_context(|| format!("Failed to read corpus {}", path.display()))?;
        corpora.extend(loaded);
    }

    let mut store = StatementStore::new();
    let stats = CorpusLoader::load_all(&mut store, &corpora);
    log::info!(
        "Statement store ready: {} statements, {} links",
        store.len(),
        store.link_count()
    );
    Ok((store, stats))
}

/// Write the store back to the snapshot it was loaded from.
async fn save_learned(bot: &ChatBot, snapshot: Option<&Path>) -> Result<()> {
    let Some(path) = snapshot else {
        return Ok(());
    };
    let store = bot.store();
    let store = store.read().await;
    store
        .save(path)
        .await
        .with_context(|| format!("Failed to write snapshot {}", path.display()))
}

async fn reply_to(bot: &ChatBot, raw: &str) -> String {
    match gate::gate(raw) {
        Gate::Pass(message) => bot.respond(&message).await,
        Gate::Reply(reply) => reply.to_string(),
    }
}

async fn run_ask(bot: &ChatBot, args: AskArgs) -> Result<()> {
    if args.json {
        let request: ChatRequest = serde_json::from_str(&args.message)
            .context("--json expects a {\"message\": \"...\"} envelope")?;
        let reply = reply_to(bot, &request.message).await;
        print_stdout(&serde_json::to_string(&ChatResponse { response: &reply })?)
    } else {
        let reply = reply_to(bot, &args.message).await;
        print_stdout(&reply)
    }
}

async fn run_chat(bot: &ChatBot) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if interactive {
            print!("you> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }
        let reply = reply_to(bot, &line).await;
        if interactive {
            print_stdout(&format!("bot> {reply}"))?;
        } else {
            print_stdout(&reply)?;
        }
    }

    Ok(())
}

async fn run_train(store: &StatementStore, stats: LoadStats, args: TrainArgs) -> Result<()> {
    store
        .save(&args.save)
        .await
        .with_context(|| format!("Failed to write snapshot {}", args.save.display()))?;

    let output = TrainOutput {
        snapshot: args.save.display().to_string(),
        conversations: stats.conversations,
        statements: store.len(),
        links: store.link_count(),
    };
    if args.json {
        print_stdout(&serde_json::to_string_pretty(&output)?)
    } else {
        print_stdout(&format!(
            "Saved {} statements and {} links from {} conversations to {}",
            output.statements, output.links, output.conversations, output.snapshot
        ))
    }
}

fn run_stats(store: &StatementStore, args: StatsArgs) -> Result<()> {
    let output = StatsOutput {
        statements: store.len(),
        links: store.link_count(),
        prompts: store.prompts().count(),
    };
    if args.json {
        print_stdout(&serde_json::to_string_pretty(&output)?)
    } else {
        print_stdout(&format!(
            "statements: {}\nlinks: {}\nprompts: {}",
            output.statements, output.links, output.prompts
        ))
    }
}
