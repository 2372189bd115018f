use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wikidate_core::DateFormats;
use wikidate_core::audit::audit;
use wikidate_core::config::{WikidateConfig, default_config_path, load_config};
use wikidate_core::kind::FormatKind;
use wikidate_core::titletranslate::translate_title;

#[derive(Debug, Parser)]
#[command(
    name = "wikidate",
    version,
    about = "Render and recognise calendar page titles across wiki languages"
)]
struct Cli {
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_name = "CODE", help = "Wiki language code (default: en)")]
    lang: Option<String>,
    #[arg(long, global = true, help = "Print resolved runtime diagnostics")]
    diagnostics: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Render a value as a title of the given format")]
    Format(FormatArgs),
    #[command(about = "Decode a title of the given format")]
    Parse(ParseArgs),
    #[command(about = "Find the format a title belongs to")]
    Detect(DetectArgs),
    #[command(about = "Render a year; negative years are BC")]
    Year(YearArgs),
    #[command(about = "Render a day-of-month title")]
    Date(DateArgs),
    #[command(about = "Render a recognised title in every other language")]
    Translate(TranslateArgs),
    #[command(about = "List format kinds")]
    Kinds,
    #[command(about = "List languages, optionally for one format kind")]
    Languages(LanguagesArgs),
    #[command(about = "Encode and decode every test value of every format")]
    Selftest(SelftestArgs),
    #[command(about = "Check multi-branch formats for overlapping or missing branches")]
    Audit,
}

#[derive(Debug, Args)]
struct FormatArgs {
    kind: String,
    #[arg(allow_negative_numbers = true)]
    value: i64,
}

#[derive(Debug, Args)]
struct ParseArgs {
    kind: String,
    text: String,
}

#[derive(Debug, Args)]
struct DetectArgs {
    title: String,
    #[arg(long, help = "Print JSON")]
    json: bool,
}

#[derive(Debug, Args)]
struct YearArgs {
    #[arg(allow_negative_numbers = true)]
    year: i64,
}

#[derive(Debug, Args)]
struct DateArgs {
    month: u32,
    day: u32,
}

#[derive(Debug, Args)]
struct TranslateArgs {
    title: String,
    #[arg(long = "to", value_name = "CODE", help = "Limit target languages (repeatable)")]
    to: Vec<String>,
    #[arg(long, help = "Print JSON")]
    json: bool,
}

#[derive(Debug, Args)]
struct LanguagesArgs {
    kind: Option<String>,
}

#[derive(Debug, Args)]
struct SelftestArgs {
    #[arg(long, value_name = "KIND")]
    kind: Option<String>,
}

struct Runtime {
    config_path: PathBuf,
    config: WikidateConfig,
    lang: String,
    formats: DateFormats,
    diagnostics: bool,
}

impl Runtime {
    fn from_cli(cli: &Cli) -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => {
                let root = env::current_dir().context("failed to resolve current directory")?;
                default_config_path(&root)
            }
        };
        let config = load_config(&config_path)?;
        let lang = config.lang(cli.lang.as_deref());
        let formats = config.formats();
        Ok(Self {
            config_path,
            config,
            lang,
            formats,
            diagnostics: cli.diagnostics,
        })
    }

    fn print_diagnostics(&self) {
        if !self.diagnostics {
            return;
        }
        println!("\n[diagnostics]");
        println!("config_path: {}", normalize_path(&self.config_path));
        println!("config_exists: {}", format_flag(self.config_path.exists()));
        println!("lang: {}", self.lang);
        println!(
            "ignore_first_letter_case: {}",
            format_flag(self.config.date.ignore_first_letter_case)
        );
        println!("patterns_cached: {}", self.formats.patterns().len());
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = &cli.command else {
        let mut command = Cli::command();
        command.print_help()?;
        println!();
        return Ok(());
    };
    let runtime = Runtime::from_cli(&cli)?;

    match command {
        Commands::Format(args) => run_format(&runtime, args),
        Commands::Parse(args) => run_parse(&runtime, args),
        Commands::Detect(args) => run_detect(&runtime, args),
        Commands::Year(YearArgs { year }) => {
            println!("{}", runtime.formats.format_year(&runtime.lang, *year)?);
            runtime.print_diagnostics();
            Ok(())
        }
        Commands::Date(DateArgs { month, day }) => {
            println!(
                "{}",
                runtime.formats.format_date(&runtime.lang, *month, *day)?
            );
            runtime.print_diagnostics();
            Ok(())
        }
        Commands::Translate(args) => run_translate(&runtime, args),
        Commands::Kinds => run_kinds(&runtime),
        Commands::Languages(args) => run_languages(&runtime, args),
        Commands::Selftest(args) => run_selftest(&runtime, args),
        Commands::Audit => run_audit(&runtime),
    }
}

fn parse_kind(name: &str) -> Result<FormatKind> {
    name.parse::<FormatKind>()
        .context("run `wikidate kinds` to list valid format kinds")
}

fn run_format(runtime: &Runtime, args: &FormatArgs) -> Result<()> {
    let kind = parse_kind(&args.kind)?;
    let title = runtime
        .formats
        .format_value(kind, &runtime.lang, args.value)?;
    println!("{title}");
    runtime.print_diagnostics();
    Ok(())
}

fn run_parse(runtime: &Runtime, args: &ParseArgs) -> Result<()> {
    let kind = parse_kind(&args.kind)?;
    let value = runtime
        .formats
        .parse_value(kind, &runtime.lang, &args.text)?;
    println!("{value}");
    runtime.print_diagnostics();
    Ok(())
}

fn run_detect(runtime: &Runtime, args: &DetectArgs) -> Result<()> {
    let detected = runtime.formats.get_auto_format(&runtime.lang, &args.title);
    if args.json {
        let report = detected.map(|(kind, value)| serde_json::json!({ "kind": kind, "value": value }));
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match detected {
            Some((kind, value)) => {
                println!("kind: {kind}");
                println!("value: {value}");
            }
            None => println!("kind: <none>"),
        }
    }
    runtime.print_diagnostics();
    Ok(())
}

fn run_translate(runtime: &Runtime, args: &TranslateArgs) -> Result<()> {
    let mut options = runtime.config.translate_options();
    if !args.to.is_empty() {
        options.languages = args.to.clone();
    }
    let translated = translate_title(&runtime.formats, &runtime.lang, &args.title, &options);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&translated)?);
    } else {
        match translated {
            Some(translated) => {
                println!("kind: {}", translated.kind);
                println!("value: {}", translated.value);
                if translated.translations.is_empty() {
                    println!("translations: <empty>");
                }
                for translation in &translated.translations {
                    println!("{}: {}", translation.lang, translation.title);
                }
            }
            None => println!("kind: <none>"),
        }
    }
    runtime.print_diagnostics();
    Ok(())
}

fn run_kinds(runtime: &Runtime) -> Result<()> {
    for kind in runtime.formats.kinds() {
        let limit = kind.limit();
        println!(
            "{kind}: {}..{} ({} languages)",
            limit.min,
            limit.max,
            runtime.formats.languages(kind).len()
        );
    }
    runtime.print_diagnostics();
    Ok(())
}

fn run_languages(runtime: &Runtime, args: &LanguagesArgs) -> Result<()> {
    let languages = match &args.kind {
        Some(kind) => runtime.formats.languages(parse_kind(kind)?),
        None => runtime.formats.all_languages(),
    };
    println!("{}", languages.join(" "));
    runtime.print_diagnostics();
    Ok(())
}

fn run_selftest(runtime: &Runtime, args: &SelftestArgs) -> Result<()> {
    let kinds = match &args.kind {
        Some(kind) => vec![parse_kind(kind)?],
        None => runtime.formats.kinds(),
    };

    let mut total = 0usize;
    for kind in kinds {
        let failures = runtime.formats.check_round_trip(kind);
        println!("{kind}: {}", if failures.is_empty() { "ok" } else { "FAILED" });
        for failure in &failures {
            println!("  - {}/{}: {}", failure.lang, failure.value, failure.problem);
        }
        total += failures.len();
    }
    runtime.print_diagnostics();

    if total > 0 {
        bail!("{total} round-trip failure(s)");
    }
    Ok(())
}

fn run_audit(runtime: &Runtime) -> Result<()> {
    let issues = audit(&runtime.formats);
    if issues.is_empty() {
        println!("audit: ok");
    }
    for issue in &issues {
        println!("  - {issue}");
    }
    runtime.print_diagnostics();

    if !issues.is_empty() {
        bail!("{} data issue(s) in multi-branch formats", issues.len());
    }
    Ok(())
}

fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn format_flag(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
