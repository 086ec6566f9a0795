//! textsweep - invisible-character inspector and text cleaner
//!
//! CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use textsweep::{
    exit_codes, render_visible, unicode_name, CleanArgs, Cli, Commands, Config, DetectArgs,
    PatternRule, ScanArgs, ScanDelivery, ScanReport, ScanWorker, Scanner, Session, StatsArgs,
    TextStats,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load config file if specified, otherwise check the default locations
    let config = match &cli.config {
        Some(config_path) => match Config::load_from_path(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {:#}", e);
                Config::default()
            }
        },
        None => Config::load().unwrap_or_default(),
    };

    let result = match cli.command {
        Commands::Detect(args) => run_detect(&args, &config),
        Commands::Scan(args) => run_scan(&args, &config),
        Commands::Clean(args) => run_clean(&args, &config),
        Commands::Stats(args) => run_stats(&args, &config),
        Commands::Info => run_info(&config),
    };

    std::process::exit(match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_codes::GENERAL_ERROR
        }
    });
}

// ============ Input / Output Helpers ============

/// Read an input file, or stdin when the path is `-`
fn read_input(path: &Path) -> Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("reading stdin")?;
        buffer
    } else {
        if !path.exists() {
            eprintln!("Error: Input file does not exist: {}", path.display());
            std::process::exit(exit_codes::INPUT_NOT_FOUND);
        }
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?
    };

    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}

/// Exit with the empty-input code when there is nothing to work on
fn require_non_empty(text: &str, path: &Path) {
    if text.is_empty() {
        eprintln!("Error: Input text is empty: {}", path.display());
        std::process::exit(exit_codes::EMPTY_INPUT);
    }
}

/// Write to a file, or stdout when no output path is given
fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("writing {}", path.display())),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

fn input_label(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

// ============ Detect Command ============

fn run_detect(args: &DetectArgs, config: &Config) -> Result<()> {
    let text = read_input(&args.input)?;
    require_non_empty(&text, &args.input);

    let set = config.watermark_set()?;
    let rendered = render_visible(&text, &set);
    write_output(args.output.as_deref(), &rendered)
}

// ============ Scan Command ============

fn run_scan(args: &ScanArgs, config: &Config) -> Result<()> {
    let set = config.watermark_set()?;
    let mut options = config.scan_options();
    if let Some(threshold) = args.threshold {
        options.entropy_threshold = threshold;
    }
    if let Some(limit) = args.limit {
        options.detail_limit = limit;
    }
    let scanner = Scanner::new(set, options);

    if args.inputs.len() == 1 {
        let input = &args.inputs[0];
        let text = read_input(input)?;
        require_non_empty(&text, input);

        let report = scan_in_background(scanner, text)?;
        print_report(&input_label(input), &report, args.json)?;
        return Ok(());
    }

    // Multiple inputs scan in parallel; reports print in input order.
    // Each file meets the same empty-input precondition as the single path
    let texts: Vec<(PathBuf, String)> = args
        .inputs
        .iter()
        .map(|path| {
            let text = read_input(path)?;
            require_non_empty(&text, path);
            Ok((path.clone(), text))
        })
        .collect::<Result<_>>()?;

    let reports: Vec<(String, ScanReport)> = texts
        .par_iter()
        .map(|(path, text)| (input_label(path), scanner.scan(text)))
        .collect();

    for (label, report) in &reports {
        print_report(label, report, args.json)?;
    }
    Ok(())
}

/// Run a single scan through the background worker with a spinner
///
/// The worker delivers exactly one report per ticket; the consumer keeps
/// the highest ticket it has seen, so a newer request would simply
/// supersede this one.
fn scan_in_background(scanner: Scanner, text: String) -> Result<ScanReport> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Scanning...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let rt = tokio::runtime::Runtime::new().context("starting async runtime")?;
    let report = rt.block_on(async {
        let mut worker = ScanWorker::spawn(scanner);
        let ticket = worker
            .submit(text)
            .await
            .map_err(anyhow::Error::msg)?;

        let mut latest: Option<ScanDelivery> = None;
        while let Some(delivery) = worker.recv().await {
            let done = delivery.ticket == ticket;
            if delivery.supersedes(latest.as_ref().map(|d| d.ticket)) {
                latest = Some(delivery);
            }
            if done {
                break;
            }
        }
        worker.shutdown().await;
        latest
            .map(|delivery| delivery.report)
            .context("scan delivered no report")
    })?;

    spinner.finish_and_clear();
    Ok(report)
}

fn print_report(label: &str, report: &ScanReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("=== Scan Report: {} ===", label);
    println!("Invisible Unicode chars found: {}", report.total_occurrences);
    for occurrence in &report.occurrences {
        println!("  {}", occurrence);
    }
    let hidden = report.total_occurrences - report.occurrences.len();
    if hidden > 0 {
        println!("  ... and {} more", hidden);
    }
    println!("Word count: {}", report.word_count);
    println!(
        "AI Likelihood: {} (Entropy: {:.2}) [heuristic only]",
        report.likelihood, report.entropy
    );
    if !report.top_words.is_empty() {
        println!("Top words: {}", report.top_words.join(", "));
    }
    Ok(())
}

// ============ Clean Command ============

fn run_clean(args: &CleanArgs, config: &Config) -> Result<()> {
    let text = read_input(&args.input)?;
    require_non_empty(&text, &args.input);

    let set = config.watermark_set()?;

    // Config provides defaults; CLI flags win
    let mut options = config.clean_options(&set)?;
    if args.collapse_whitespace {
        options.collapse_whitespace = true;
    }
    if args.strip_tabs {
        options.strip_tabs = true;
    }
    if let Some(width) = args.expand_tabs {
        options.expand_tabs = Some(width);
    }
    if args.collapse_blank_lines {
        options.collapse_blank_lines = true;
    }
    if args.trim_lines {
        options.trim_lines = true;
    }
    if args.strip_watermarks {
        options.strip_watermarks = true;
    }
    if let Some(pattern) = &args.pattern {
        options.pattern = Some(PatternRule::new(
            pattern.clone(),
            args.replacement.clone().unwrap_or_default(),
        ));
    } else if let Some(preset) = args.preset {
        options.pattern = preset.rule(&set);
    }

    let mut session = Session::with_config(set, config.scan_options());
    session.set_text(text);
    session.clean(&options).context("clean failed")?;

    write_output(args.output.as_deref(), session.text())?;

    if args.show_invisible {
        println!("{}", session.detect());
    }
    Ok(())
}

// ============ Stats Command ============

fn run_stats(args: &StatsArgs, config: &Config) -> Result<()> {
    let text = read_input(&args.input)?;
    let set = config.watermark_set()?;
    let stats = TextStats::compute(&text, &set);
    println!(
        "Spaces: {} | Tabs: {} | Newlines: {} | Invisible Unicode: {} | Chars: {}",
        stats.spaces, stats.tabs, stats.newlines, stats.watermarks, stats.chars
    );
    Ok(())
}

// ============ Info Command ============

fn run_info(config: &Config) -> Result<()> {
    println!("textsweep v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let set = config.watermark_set()?;
    println!("Active watermark set ({} code points):", set.len());
    for c in set.chars() {
        println!("  U+{:04X}  {}", c as u32, unicode_name(c));
    }

    let options = config.scan_options();
    println!();
    println!("Scan heuristic:");
    println!("  Entropy threshold: {} (below = High likelihood; illustrative only)", options.entropy_threshold);
    println!("  Detail limit:      {}", options.detail_limit);
    println!("  Top words:         {}", options.top_words);

    println!();
    println!("Config File Locations:");
    println!("  Local: ./{}", Config::local_path().display());
    if let Some(user) = Config::user_path() {
        println!("  User:  {}", user.display());
    }

    Ok(())
}
