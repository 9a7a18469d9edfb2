//! resume-outline CLI - resume line stream segmentation tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resume_outline::{input, Error, JsonFormat, Outliner, SectionKind, Segmentation};

#[derive(Parser)]
#[command(name = "resume-outline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Segment resume line streams into sections and entries", long_about = None)]
struct Cli {
    /// Input line stream (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List sections and entries as plain text
    Sections {
        /// Input line stream (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Show entry scores and signal breakdowns
        #[arg(long)]
        scores: bool,

        /// Hide sections without content
        #[arg(long)]
        skip_empty: bool,

        /// Section kinds to split into entries (e.g. "experience,projects")
        #[arg(long, value_delimiter = ',')]
        structure: Vec<String>,
    },

    /// Write the section and entry outline as JSON
    Outline {
        /// Input line stream (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Section kinds to split into entries (e.g. "experience,projects")
        #[arg(long, value_delimiter = ',')]
        structure: Vec<String>,
    },

    /// Write line records and entry scores as JSON
    #[command(alias = "detailed")]
    Detail {
        /// Input line stream (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Section kinds to split into entries (e.g. "experience,projects")
        #[arg(long, value_delimiter = ',')]
        structure: Vec<String>,
    },

    /// Segment many line streams into an output directory
    Batch {
        /// Input line streams (JSON)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Process files one at a time
        #[arg(long)]
        sequential: bool,

        /// Section kinds to split into entries (e.g. "experience,projects")
        #[arg(long, value_delimiter = ',')]
        structure: Vec<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Sections {
            input,
            output,
            scores,
            skip_empty,
            structure,
        }) => cmd_sections(&input, output.as_deref(), scores, skip_empty, &structure),
        Some(Commands::Outline {
            input,
            output,
            compact,
            structure,
        }) => cmd_outline(&input, output.as_deref(), compact, &structure),
        Some(Commands::Detail {
            input,
            output,
            compact,
            structure,
        }) => cmd_detail(&input, output.as_deref(), compact, &structure),
        Some(Commands::Batch {
            inputs,
            output,
            compact,
            sequential,
            structure,
        }) => cmd_batch(&inputs, output.as_deref(), compact, sequential, &structure),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: print sections if input is provided
            if let Some(input) = cli.input {
                cmd_sections(&input, None, false, false, &[])
            } else {
                println!("{}", "Usage: resume-outline <FILE>".yellow());
                println!("       resume-outline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Build an outliner, restricting structured kinds when any are named.
fn outliner(structure: &[String]) -> Result<Outliner, Box<dyn std::error::Error>> {
    if structure.is_empty() {
        return Ok(Outliner::new());
    }

    let kinds = structure
        .iter()
        .map(|name| {
            SectionKind::from_name(name).ok_or_else(|| {
                let known: Vec<_> = SectionKind::ALL.iter().map(|k| k.as_str()).collect();
                Error::Other(format!(
                    "Unknown section kind '{}' (expected one of: {})",
                    name,
                    known.join(", ")
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Structured section kinds: {:?}", kinds);
    Ok(Outliner::new().with_structured_kinds(kinds))
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        log::info!("Wrote {} bytes to {}", content.len(), path.display());
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_sections(
    input: &Path,
    output: Option<&Path>,
    scores: bool,
    skip_empty: bool,
    structure: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut outliner = outliner(structure)?;
    if scores {
        outliner = outliner.with_scores();
    }
    if skip_empty {
        outliner = outliner.skip_empty_sections();
    }

    let text = outliner.segment_file(input)?.to_text()?;
    emit(&text, output)
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    structure: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let result = outliner(structure)?.segment_file(input)?;
    let json = result.to_json(json_format(compact))?;
    emit(&json, output)
}

fn cmd_detail(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    structure: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let result = outliner(structure)?.segment_file(input)?;
    let json = result.to_detailed_json(json_format(compact))?;
    emit(&json, output)
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: Option<&Path>,
    compact: bool,
    sequential: bool,
    structure: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("outline_output"));
    fs::create_dir_all(&output_dir)?;

    let mut outliner = outliner(structure)?;
    if sequential {
        outliner = outliner.sequential();
    }

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Loading...");
    let mut documents = Vec::with_capacity(inputs.len());
    for path in inputs {
        let lines = input::lines_from_path(path)?;
        log::debug!("Loaded {} lines from {}", lines.len(), path.display());
        documents.push(lines);
        pb.inc(1);
    }

    pb.set_message("Segmenting...");
    let results = outliner.segment_batch(documents);

    let mut written = Vec::with_capacity(results.len());
    for (path, result) in inputs.iter().zip(&results) {
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        let filename = format!("{}.outline.json", stem);
        let target = output_dir.join(&filename);
        fs::write(&target, result.to_json(json_format(compact))?)?;
        log::info!("Wrote {}", target.display());
        written.push((filename, result.segmentation()));
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, (filename, segmentation)) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!(
            "  {} {} {}",
            branch.dimmed(),
            filename,
            summary(segmentation).dimmed()
        );
    }

    Ok(())
}

fn summary(segmentation: &Segmentation) -> String {
    let stats = segmentation.stats();
    format!(
        "({} sections, {} entries, {} lines)",
        stats.section_count, stats.subsection_count, stats.line_count
    )
}

fn cmd_version() {
    println!(
        "{} {}",
        "resume-outline".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Resume line stream segmentation tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/resume-outline".dimmed()
    );
    println!("License: MIT");
}
