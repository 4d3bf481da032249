//! Action Toolkit CLI - utility actions for the shell

use actionkit_core::net::JsonFetcher;
use actionkit_core::{
    dates, ident, rng::sample, CasingStyle, CharacterClassSet, DateStyle, RandomTextBuilder,
    ShiftUnit,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod context;
mod output;

use context::ActionContext;
use output::ActionOutput;

#[derive(Parser)]
#[command(name = "actionkit")]
#[command(version, about = "Utility actions for the shell", long_about = None)]
struct Cli {
    /// Seed phrase for deterministic output (same seed, same results)
    #[arg(long, global = true, value_name = "TEXT")]
    seed: Option<String>,

    /// Output JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random strings
    RandomText {
        /// Characters per string
        #[arg(long, default_value_t = 10)]
        length: usize,

        /// Draw from this exact alphabet instead of character classes
        #[arg(long, value_name = "CHARS")]
        alphabet: Option<String>,

        /// Include lowercase letters (class flags replace the default set)
        #[arg(long, conflicts_with = "alphabet")]
        lowercase: bool,

        /// Include uppercase letters (class flags replace the default set)
        #[arg(long, conflicts_with = "alphabet")]
        uppercase: bool,

        /// Include digits (class flags replace the default set)
        #[arg(long, conflicts_with = "alphabet")]
        digits: bool,

        /// How many strings to generate
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Draw a random integer from an inclusive range
    RandomNumber {
        /// Smallest value the draw can return
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        min: i64,

        /// Largest value the draw can return
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        max: i64,
    },

    /// Mint version-4 UUIDs
    Uuid {
        /// How many UUIDs to mint
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Choose one item from a list
    Pick {
        /// Candidates to choose from
        #[arg(required = true, value_name = "ITEM")]
        items: Vec<String>,
    },

    /// Reorder a list randomly
    Shuffle {
        /// Items to reorder
        #[arg(required = true, value_name = "ITEM")]
        items: Vec<String>,
    },

    /// Recase text
    Case {
        /// Target casing style
        #[arg(value_enum)]
        style: StyleArg,

        /// Text to recase (quote multi-word input)
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Whole days between two calendar dates
    DaysBetween {
        /// Start date, YYYY-MM-DD
        #[arg(value_name = "START")]
        start: String,

        /// End date, YYYY-MM-DD
        #[arg(value_name = "END")]
        end: String,
    },

    /// Move an instant forward or backward in time
    ShiftDate {
        /// How many units to move (negative shifts into the past)
        #[arg(long, allow_negative_numbers = true)]
        amount: i64,

        /// Unit of the shift
        #[arg(long, value_enum)]
        unit: UnitArg,

        /// Instant to shift, RFC 3339 [default: now]
        #[arg(long, value_name = "TIMESTAMP")]
        from: Option<String>,
    },

    /// Render an instant in a named style
    FormatDate {
        /// Output style
        #[arg(long, value_enum, default_value = "iso8601")]
        style: DateStyleArg,

        /// Instant to render, RFC 3339 [default: now]
        #[arg(long, value_name = "TIMESTAMP")]
        from: Option<String>,
    },

    /// GET a URL and print the JSON response
    FetchJson {
        /// URL to request
        url: String,

        /// Extra request header, "Name: value" (repeatable)
        #[arg(long = "header", value_name = "NAME: VALUE")]
        headers: Vec<String>,
    },
}

/// Casing styles accepted by `case`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Pascal,
    Camel,
    Snake,
    Constant,
    Dash,
}

impl From<StyleArg> for CasingStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Pascal => CasingStyle::Pascal,
            StyleArg::Camel => CasingStyle::Camel,
            StyleArg::Snake => CasingStyle::Snake,
            StyleArg::Constant => CasingStyle::Constant,
            StyleArg::Dash => CasingStyle::Dash,
        }
    }
}

/// Shift units accepted by `shift-date`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitArg {
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl From<UnitArg> for ShiftUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Minutes => ShiftUnit::Minutes,
            UnitArg::Hours => ShiftUnit::Hours,
            UnitArg::Days => ShiftUnit::Days,
            UnitArg::Weeks => ShiftUnit::Weeks,
        }
    }
}

/// Output styles accepted by `format-date`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DateStyleArg {
    Iso8601,
    Rfc2822,
    Date,
    Time,
}

impl From<DateStyleArg> for DateStyle {
    fn from(style: DateStyleArg) -> Self {
        match style {
            DateStyleArg::Iso8601 => DateStyle::Iso8601,
            DateStyleArg::Rfc2822 => DateStyle::Rfc2822,
            DateStyleArg::Date => DateStyle::DateOnly,
            DateStyleArg::Time => DateStyle::TimeOnly,
        }
    }
}

/// Initialize tracing subscriber based on verbosity
fn init_tracing(verbose: u8) {
    // RUST_LOG wins when set; otherwise the -v count picks the filter.
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,actionkit=info,actionkit_core=info".to_string(),
            2 => "info,actionkit=debug,actionkit_core=debug".to_string(),
            _ => "debug,actionkit=trace,actionkit_core=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = ActionContext::from_seed_text(cli.seed.as_deref());
    tracing::debug!(seeded = cli.seed.is_some(), "random source ready");

    let Some(command) = cli.command else {
        // No subcommand: show where the actions are.
        output::print(&output::catalog(), cli.json)?;
        return Ok(());
    };

    let result = match command {
        Commands::RandomText {
            length,
            alphabet,
            lowercase,
            uppercase,
            digits,
            count,
        } => {
            let classes = if lowercase || uppercase || digits {
                CharacterClassSet {
                    lowercase,
                    uppercase,
                    digits,
                }
            } else {
                CharacterClassSet::all()
            };
            random_text(&mut context, length, alphabet.as_deref(), classes, count)?
        }
        Commands::RandomNumber { min, max } => random_number(&mut context, min, max)?,
        Commands::Uuid { count } => uuid(&mut context, count),
        Commands::Pick { items } => pick(&mut context, &items)?,
        Commands::Shuffle { items } => shuffle(&mut context, items),
        Commands::Case { style, text } => recase(style.into(), &text),
        Commands::DaysBetween { start, end } => days_between(&start, &end)?,
        Commands::ShiftDate { amount, unit, from } => {
            shift_date(amount, unit.into(), from.as_deref())?
        }
        Commands::FormatDate { style, from } => format_date(style.into(), from.as_deref())?,
        Commands::FetchJson { url, headers } => fetch_json(&url, &headers).await?,
    };

    output::print(&result, cli.json)?;
    Ok(())
}

fn random_text(
    context: &mut ActionContext,
    length: usize,
    alphabet: Option<&str>,
    classes: CharacterClassSet,
    count: usize,
) -> Result<ActionOutput, Box<dyn std::error::Error>> {
    let builder = match alphabet {
        Some("") => return Err("alphabet must not be empty".into()),
        Some(custom) => RandomTextBuilder::new(length).with_alphabet(custom),
        None => RandomTextBuilder::new(length).with_classes(classes),
    };

    let values = (0..count)
        .map(|_| builder.generate(context.source()))
        .collect();
    Ok(ActionOutput::values(values))
}

fn random_number(
    context: &mut ActionContext,
    min: i64,
    max: i64,
) -> Result<ActionOutput, Box<dyn std::error::Error>> {
    if min > max {
        return Err(format!("empty range: min {min} exceeds max {max}").into());
    }

    let value = context.draw_inclusive(min, max);
    Ok(ActionOutput::value(serde_json::json!(value)))
}

fn uuid(context: &mut ActionContext, count: usize) -> ActionOutput {
    let values = (0..count)
        .map(|_| ident::uuid_with_source(context.source()).to_string())
        .collect();
    ActionOutput::values(values)
}

fn pick(
    context: &mut ActionContext,
    items: &[String],
) -> Result<ActionOutput, Box<dyn std::error::Error>> {
    let choice = sample::pick(context.source(), items).ok_or("nothing to pick from")?;
    Ok(ActionOutput::value(serde_json::json!(choice)))
}

fn shuffle(context: &mut ActionContext, mut items: Vec<String>) -> ActionOutput {
    sample::shuffle(context.source(), &mut items);
    ActionOutput::values(items)
}

fn recase(style: CasingStyle, text: &str) -> ActionOutput {
    ActionOutput::value(serde_json::json!(style.apply(text)))
}

fn days_between(start: &str, end: &str) -> Result<ActionOutput, Box<dyn std::error::Error>> {
    let start = dates::parse_date(start)?;
    let end = dates::parse_date(end)?;

    let days = dates::days_between(start, end);
    Ok(ActionOutput::value(serde_json::json!(days)))
}

fn shift_date(
    amount: i64,
    unit: ShiftUnit,
    from: Option<&str>,
) -> Result<ActionOutput, Box<dyn std::error::Error>> {
    let instant = parse_from_or_now(from)?;
    let shifted = dates::shift(instant, amount, unit)?;

    let rendered = dates::format_timestamp(shifted, DateStyle::Iso8601);
    Ok(ActionOutput::value(serde_json::json!(rendered)))
}

fn format_date(
    style: DateStyle,
    from: Option<&str>,
) -> Result<ActionOutput, Box<dyn std::error::Error>> {
    let instant = parse_from_or_now(from)?;

    let rendered = dates::format_timestamp(instant, style);
    Ok(ActionOutput::value(serde_json::json!(rendered)))
}

/// The `--from` convention: parse when given, otherwise the current time.
fn parse_from_or_now(from: Option<&str>) -> Result<DateTime<Utc>, dates::DateError> {
    match from {
        Some(text) => dates::parse_timestamp(text),
        None => Ok(Utc::now()),
    }
}

async fn fetch_json(
    url: &str,
    raw_headers: &[String],
) -> Result<ActionOutput, Box<dyn std::error::Error>> {
    let mut headers = Vec::with_capacity(raw_headers.len());
    for raw in raw_headers {
        let (name, value) = raw
            .split_once(':')
            .ok_or_else(|| format!("invalid header '{raw}': expected 'Name: value'"))?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    let fetcher = JsonFetcher::new()?;
    let value = fetcher.fetch(url, &headers).await?;

    let lines = vec![serde_json::to_string_pretty(&value)?];
    Ok(ActionOutput { lines, json: value })
}
