use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use sieve_core::{
    DEFAULT_INPUT_HTML, DEFAULT_INTERMEDIATE_CSV, DEFAULT_OUTPUT_CSV, Document, PipelineConfig, TableSelectors,
    TextConfig, read_file, read_stdin, report_to_text, run_pipeline_on, summary_to_json,
};
use tracing_subscriber::EnvFilter;

mod echo;

use echo::{
    format_size, print_banner, print_detail, print_extraction_details, print_info, print_step, print_success,
    print_warning,
};

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exclude survey papers from a saved scholar profile and compare citation indices
#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(author = "Sieve Contributors")]
#[command(version)]
#[command(about = "Exclude survey papers from a saved scholar profile", long_about = None)]
struct Args {
    /// Saved profile page, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_HTML)]
    input: String,

    /// CSV file receiving every extracted publication
    #[arg(long, value_name = "FILE", default_value = DEFAULT_INTERMEDIATE_CSV)]
    intermediate: PathBuf,

    /// CSV file receiving the non-survey publications
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_CSV)]
    output: PathBuf,

    /// Additional survey keyword (repeatable)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Element id of the publication table
    #[arg(long, default_value = "gsc_a_t", value_name = "ID")]
    table_id: String,

    /// Print the run summary as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn pipeline_config(&self) -> PipelineConfig {
        let mut builder = PipelineConfig::builder()
            .input_html(&self.input)
            .intermediate_csv(&self.intermediate)
            .output_csv(&self.output)
            .selectors(TableSelectors::with_table_id(&self.table_id));

        for keyword in &self.keywords {
            builder = builder.extra_keyword(keyword);
        }

        builder.build()
    }
}

/// Install the log subscriber; `RUST_LOG` overrides the level picked by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let config = args.pipeline_config();

    let html = if args.input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading from stdin");
        }
        read_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        read_file(&config.input_html).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if args.verbose {
        print_detail("Size", &format_size(html.len()));
        eprintln!();
        print_step(2, 3, "Parsing HTML");
    }

    let doc = Document::parse(&html).context("Failed to parse HTML")?;

    if args.verbose {
        print_step(3, 3, "Extracting publications and excluding surveys");
    }

    let summary = run_pipeline_on(&doc, &config).context("Failed to process profile")?;
    let extraction = &summary.extraction;

    if args.verbose {
        print_extraction_details(extraction);
    }
    if extraction.empty > 0 {
        print_warning(&format!(
            "{} row(s) without publication cells written with default values",
            extraction.empty
        ));
    }

    if args.json {
        println!("{}", summary_to_json(&summary, true).context("Failed to serialize summary")?);
    } else {
        println!("Researcher Name: {}", summary.researcher);
        println!(
            "CSV file '{}' has been created with {} papers.",
            config.intermediate_csv.display(),
            summary.rows_written
        );
        print!("{}", report_to_text(&summary.report, &TextConfig::default()));
        println!("\nNon-survey papers saved as {}", config.output_csv.display());
    }

    if args.verbose {
        print_success(&format!("Output written to {}", config.output_csv.display().bright_white()));
    }

    Ok(())
}
