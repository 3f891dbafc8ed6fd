use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::generator::{DEFAULT_LENGTH, DEFAULT_SEED};
use folio::ranking::DEFAULT_K;
use folio::{FolioConfig, RankedWord, ReaderConfig, Session};
use indicatif::ProgressBar;
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Word-frequency, chapter and sentence queries over a Project Gutenberg novel")]
#[command(version)]
struct Args {
    /// Project Gutenberg plain-text book
    book: PathBuf,

    /// List of common English words, most common first
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Number of common words to filter out of "interesting"
    #[arg(long, default_value_t = 300)]
    stopword_count: usize,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Suppress the console spinner
    #[arg(long)]
    no_progress: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Chapter count, word totals and sentence count
    Summary,
    /// Most frequent words
    Top {
        #[arg(short, default_value_t = DEFAULT_K)]
        k: usize,
    },
    /// Most frequent words after removing common English words
    Interesting {
        #[arg(short, default_value_t = DEFAULT_K)]
        k: usize,
    },
    /// Least frequent words
    Rare {
        #[arg(short, default_value_t = DEFAULT_K)]
        k: usize,
    },
    /// Occurrences of a word in each chapter (case-sensitive)
    ChapterFrequency { word: String },
    /// Chapter in which a quote appears (case-sensitive)
    Quote { text: String },
    /// Every sentence starting with the given words
    Autocomplete { prefix: String },
    /// Generate a sentence in the author's style
    Generate {
        #[arg(long, default_value = DEFAULT_SEED)]
        seed: String,
        #[arg(long, default_value_t = DEFAULT_LENGTH)]
        length: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: logs go to stderr as JSON so stdout carries only query results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    // WHY: fail before the spinner starts when the book path is wrong
    if !args.book.is_file() {
        anyhow::bail!("Book file does not exist: {}", args.book.display());
    }

    let config = FolioConfig {
        book_path: args.book.clone(),
        stopwords_path: args.stopwords.clone(),
        stopword_count: args.stopword_count,
        reader: ReaderConfig {
            use_mmap: args.use_mmap,
            ..Default::default()
        },
    };

    let spinner = if args.no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_message(format!("Indexing {}", args.book.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let session = Session::load(&config).await;
    spinner.finish_and_clear();
    let session = session?;

    run(&session, &args.command, args.json)
}

fn run(session: &Session, command: &Command, as_json: bool) -> Result<()> {
    match command {
        Command::Summary => {
            let summary = session.summary();
            if as_json {
                println!("{}", serde_json::to_string_pretty(summary)?);
            } else {
                println!("Chapters: {}", summary.chapters);
                println!("Total words: {}", summary.total_words);
                println!("Unique words: {}", summary.unique_words);
                println!("Distinct tokens: {}", summary.distinct_tokens);
                println!("Sentences: {}", summary.sentences);
            }
        }
        Command::Top { k } => print_ranking(&session.top_words(*k), as_json)?,
        Command::Interesting { k } => print_ranking(&session.interesting_words(*k), as_json)?,
        Command::Rare { k } => print_ranking(&session.rare_words(*k), as_json)?,
        Command::ChapterFrequency { word } => {
            let frequency = session.chapter_frequency(word);
            if as_json {
                println!("{}", serde_json::to_string_pretty(&frequency)?);
            } else {
                for (i, count) in frequency.chapters.iter().enumerate() {
                    println!("Chapter {}\t{}", i + 1, count);
                }
            }
        }
        Command::Quote { text } => {
            let chapter = session.find_chapter_of_quote(text);
            if as_json {
                println!("{}", json!({ "quote": text, "chapter": chapter }));
            } else {
                match chapter {
                    Some(chapter) => println!("Chapter {chapter}"),
                    None => println!("Quote not found"),
                }
            }
        }
        Command::Autocomplete { prefix } => {
            let sentences = session.autocomplete(prefix);
            if as_json {
                println!("{}", serde_json::to_string_pretty(&sentences)?);
            } else {
                for sentence in &sentences {
                    println!("{sentence}");
                }
            }
        }
        Command::Generate { seed, length } => {
            let sentence = session.generate_sentence(seed, *length, &mut fastrand::Rng::new());
            if as_json {
                println!("{}", json!({ "sentence": sentence }));
            } else {
                println!("{sentence}");
            }
        }
    }
    Ok(())
}

fn print_ranking(words: &[RankedWord], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(words)?);
    } else {
        for (rank, entry) in words.iter().enumerate() {
            println!("{:>3}. {}\t{}", rank + 1, entry.word, entry.count);
        }
    }
    Ok(())
}
