use std::fs;
use std::fs::File;
use std::io::{stdout, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use gotalign::aligner::alignment::AlignmentReport;
use gotalign::aligner::{GapAffine, GotalignAligner};
use gotalign::errors::GotalignError;
use gotalign::io::collect_cases;

/// The output formats supported by gotalign
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputType {
    /// Human-readable alignment rows plus the optimal score
    Text,

    /// One JSON report object per input case
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct CliArgs {
    #[command(subcommand)]
    command: Option<CliSubcommand>,
}

#[derive(Subcommand, Debug)]
enum CliSubcommand {
    /// Globally align sequence pairs under an affine gap model
    Align(AlignArgs),
}

#[derive(Args, Debug)]
struct AlignArgs {
    /// Input cases: two-line pair files or FASTA files (.gz supported).
    /// Directories contribute their files sorted by name.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Score awarded for aligning two identical symbols
    #[arg(long, default_value_t = 3.0, allow_hyphen_values = true)]
    match_score: f64,

    /// Score for aligning two different symbols
    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    mismatch_score: f64,

    /// Penalty for starting a new run of gaps
    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    gap_open: f64,

    /// Penalty for continuing a run of gaps already in progress
    #[arg(long, default_value_t = -0.5, allow_hyphen_values = true)]
    gap_extend: f64,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'O', long)]
    output_type: Option<OutputType>,
}

fn align_subcommand(align_args: &AlignArgs) -> Result<()> {
    let cases = collect_cases(&align_args.inputs)
        .with_context(|| "Could not read input cases.".to_string())?;

    let scoring = GapAffine::new(
        align_args.match_score,
        align_args.mismatch_score,
        align_args.gap_open,
        align_args.gap_extend,
    );
    let aligner = GotalignAligner::new(scoring);

    let mut writer: Box<dyn Write> = if let Some(path) = &align_args.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        let file = File::create(path)?;
        Box::new(file) as Box<dyn Write>
    } else {
        Box::new(stdout()) as Box<dyn Write>
    };

    let output_type = align_args.output_type.unwrap_or(OutputType::Text);
    match output_type {
        OutputType::Text => {
            for case in &cases {
                let result = aligner.align_pair(&case.seq1, &case.seq2);

                writeln!(writer, "## {}:", case.name)?;
                writeln!(writer, "{}", result.pretty())?;
                writeln!(writer, "Optimal alignment score: {}", result.score)?;
                writeln!(writer)?;
            }
        },
        OutputType::Json => {
            let reports: Vec<AlignmentReport> = cases.iter()
                .map(|case| {
                    let result = aligner.align_pair(&case.seq1, &case.seq2);
                    AlignmentReport::new(&case.name, &result)
                })
                .collect();

            serde_json::to_writer_pretty(&mut writer, &reports)?;
            writeln!(writer)?;
        },
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    match &args.command {
        Some(CliSubcommand::Align(v)) => align_subcommand(v)?,
        None => {
            return Err(GotalignError::Other).with_context(|| "No subcommand given.".to_string())
        },
    };

    Ok(())
}
