use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tastebud::{
    sample, CachedSimilarityRanker, Catalog, Error, RankedResult, SimilarityRanker, TextConfig,
    DEFAULT_TOP_N,
};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Content-based recommendations over a small catalog
#[derive(Parser, Debug)]
#[command(name = "tastebud")]
#[command(about = "Find similar items and top-rated items in a catalog", long_about = None)]
struct Args {
    /// JSON array of {title, descriptor, score}; defaults to the built-in movie catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// JSON text-analysis config (stop words, token length, idf smoothing)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Items whose descriptors are most similar to TITLE
    Recommend {
        title: String,

        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,

        /// Show the shared terms behind each recommendation
        #[arg(long)]
        explain: bool,
    },
    /// Highest-scored items
    TopRated {
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
    },
    /// All catalog titles
    List,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting tastebud v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => sample::movies()?,
    };
    info!("Catalog: {} items", catalog.len());

    let config = match &args.config {
        Some(path) => TextConfig::from_json_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => TextConfig::default(),
    };
    debug!(?config, "text config");

    // recommend and explain share one index
    let ranker = CachedSimilarityRanker::new(SimilarityRanker::new(config)?);

    match run(&args, &catalog, &ranker) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", user_message(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(args: &Args, catalog: &Catalog, ranker: &CachedSimilarityRanker) -> tastebud::Result<()> {
    match &args.command {
        Command::Recommend { title, top_n, explain } => {
            let result = ranker.recommend(catalog, title, *top_n)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result.recommendations())?);
                return Ok(());
            }

            println!("Recommended items similar to '{}':\n", title);
            print_items(&result, true);
            if *explain {
                println!();
                for ranked in &result {
                    let explanation = ranker.explain(catalog, title, &ranked.item.title)?;
                    let terms: Vec<String> = explanation
                        .terms
                        .iter()
                        .map(|t| format!("{} ({:.3})", t.term, t.contribution))
                        .collect();
                    let shared = if terms.is_empty() {
                        "no shared terms".to_string()
                    } else {
                        terms.join(", ")
                    };
                    println!("  {}: {}", explanation.candidate, shared);
                }
            }
        }
        Command::TopRated { top_n } => {
            let result = tastebud::top_rated(catalog, *top_n)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result.top_rated_entries())?);
                return Ok(());
            }

            println!("Top rated items:\n");
            print_items(&result, false);
        }
        Command::List => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(catalog.all_items())?);
                return Ok(());
            }
            for item in catalog {
                println!("{}", item.title);
            }
        }
    }
    Ok(())
}

fn print_items(result: &RankedResult, with_relevance: bool) {
    if result.is_empty() {
        println!("(no results)");
        return;
    }
    for ranked in result {
        let item = &ranked.item;
        if with_relevance {
            println!(
                "- {} (Descriptor: {}, Score: {}, Similarity: {:.3})",
                item.title, item.descriptor, item.score, ranked.relevance
            );
        } else {
            println!("- {} (Descriptor: {}, Score: {})", item.title, item.descriptor, item.score);
        }
    }
}

fn user_message(error: &Error) -> String {
    match error {
        Error::NotFound(title) => format!("'{}' is not in the catalog, please select a valid item", title),
        Error::InvalidArgument(reason) => format!("Invalid input: {}", reason),
        other => format!("Error: {}", other),
    }
}
