//! napdf CLI - sleep-schedule Markdown to PDF tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use napdf::{render_schedule, JsonFormat, PageSize, RenderOptions};

#[derive(Parser)]
#[command(name = "napdf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render sleep-schedule Markdown to paginated PDF", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Baby age in months, used to derive the document title
    #[arg(long, value_name = "MONTHS")]
    age: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to all formats (PDF, JSON)
    Convert {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Baby age in months, used to derive the document title
        #[arg(long, value_name = "MONTHS")]
        age: Option<u32>,
    },

    /// Render Markdown to PDF
    Pdf {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (input name with .pdf if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Baby age in months, used to derive the document title
        #[arg(long, value_name = "MONTHS")]
        age: Option<u32>,

        /// Explicit document title (overrides --age)
        #[arg(long)]
        title: Option<String>,

        /// Page size ("letter" or "a4")
        #[arg(long, default_value = "letter")]
        page_size: String,

        /// Bullet wrap width in characters
        #[arg(long, default_value = "90")]
        wrap: usize,

        /// Skip content stream compression
        #[arg(long)]
        uncompressed: bool,
    },

    /// Dump the parsed schedule as JSON
    Json {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Baby age in months, used to derive the document title
        #[arg(long, value_name = "MONTHS")]
        age: Option<u32>,

        /// Explicit document title (overrides --age)
        #[arg(long)]
        title: Option<String>,
    },

    /// Show schedule information
    Info {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Baby age in months, used to derive the document title
        #[arg(long, value_name = "MONTHS")]
        age: Option<u32>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output, age }) => {
            cmd_convert(&input, output.as_deref(), build_options(age, None))
        }
        Some(Commands::Pdf {
            input,
            output,
            age,
            title,
            page_size,
            wrap,
            uncompressed,
        }) => match PageSize::parse(&page_size) {
            Ok(size) => {
                let options = build_options(age, title)
                    .with_page_size(size)
                    .with_wrap_width(wrap)
                    .with_compression(!uncompressed);
                cmd_pdf(&input, output.as_deref(), options)
            }
            Err(e) => Err(e.into()),
        },
        Some(Commands::Json {
            input,
            output,
            compact,
            age,
            title,
        }) => cmd_json(&input, output.as_deref(), compact, build_options(age, title)),
        Some(Commands::Info { input, age }) => cmd_info(&input, build_options(age, None)),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), build_options(cli.age, None))
            } else {
                println!("{}", "Usage: napdf <FILE> [OUTPUT]".yellow());
                println!("       napdf --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(age: Option<u32>, title: Option<String>) -> RenderOptions {
    let mut options = RenderOptions::new();
    if let Some(months) = age {
        options = options.with_age_months(months);
    }
    if let Some(title) = title {
        options = options.with_title(title);
    }
    options
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Parse the schedule
    pb.set_message("Parsing Markdown...");
    let markdown = fs::read_to_string(input)?;
    let schedule = napdf::parse_str(&markdown, &options.title);
    log::debug!("parsed {} sections", schedule.section_count());
    pb.inc(1);

    // Render PDF
    pb.set_message("Rendering PDF...");
    let result = render_schedule(&schedule, &options)?;
    fs::write(output_dir.join("schedule.pdf"), &result.bytes)?;
    pb.inc(1);

    // Dump the parsed model
    pb.set_message("Writing JSON...");
    let json = napdf::to_json(&schedule, JsonFormat::Pretty)?;
    fs::write(output_dir.join("schedule.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} schedule.pdf", "├─".dimmed());
    println!("  {} schedule.json", "└─".dimmed());
    println!(
        "\n{} pages, {} sections, {} bullets",
        result.stats.page_count, result.stats.section_count, result.stats.bullet_count
    );

    Ok(())
}

fn cmd_pdf(
    input: &Path,
    output: Option<&Path>,
    options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let result = napdf::render_str_with_stats(&markdown, &options)?;

    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.with_extension("pdf"));
    fs::write(&path, &result.bytes)?;

    println!("{} {}", "Saved to".green(), path.display());
    println!(
        "  {} pages, {} sections, {} bytes",
        result.stats.page_count,
        result.stats.section_count,
        result.bytes.len()
    );

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = napdf::parse_file(input, &options.title)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = napdf::to_json(&schedule, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, options: RenderOptions) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = napdf::parse_file(input, &options.title)?;

    println!("{}", "Schedule Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), schedule.title);
    println!("{}: {}", "Sections".bold(), schedule.section_count());
    println!("{}: {}", "Bullets".bold(), schedule.bullet_count());

    if !schedule.sections.is_empty() {
        println!();
        println!("{}", "Sections".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());

        for section in &schedule.sections {
            if section.has_time_label() {
                println!("  {} ({})", section.heading, section.time_label);
            } else {
                println!("  {}", section.heading);
            }
        }
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = schedule.plain_text();
    let words: usize = text.split_whitespace().count();

    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), text.len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "napdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Sleep-schedule Markdown to PDF renderer");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/napdf".dimmed());
    println!("License: MIT");
}
