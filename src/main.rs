use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use neologdn::{DEFAULT_REPEAT_THRESHOLD, Normalizer, WhitespacePolicy};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "neologdn")]
#[command(about = "Normalize Japanese text line by line before dictionary lookup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Input files; reads stdin when none are given
    files: Vec<PathBuf>,

    /// Longest run of prolonged-sound marks or repeated punctuation kept
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_REPEAT_THRESHOLD)]
    repeat: usize,

    /// Keep full-width Latin letters and digits
    #[arg(long)]
    preserve_latin_width: bool,

    /// What to do with whitespace between two words
    #[arg(short, long, value_enum, default_value_t = Whitespace::Collapse)]
    whitespace: Whitespace,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Whitespace {
    /// Every internal run becomes one space
    Collapse,
    /// Drop runs unless both sides are Latin
    Strip,
}

impl From<Whitespace> for WhitespacePolicy {
    fn from(value: Whitespace) -> Self {
        match value {
            Whitespace::Collapse => WhitespacePolicy::Collapse,
            Whitespace::Strip => WhitespacePolicy::Strip,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!("neologdn={log_level}"))
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let normalizer = Normalizer::builder()
        .repeat_threshold(cli.repeat)
        .preserve_latin_width(cli.preserve_latin_width)
        .whitespace_policy(cli.whitespace.into())
        .build()
        .context("invalid normalization options")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.files.is_empty() {
        let lines = normalize_lines(&normalizer, io::stdin().lock(), &mut out)
            .context("failed to normalize stdin")?;
        debug!(lines, "normalized stdin");
    }
    for path in &cli.files {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let lines = normalize_lines(&normalizer, BufReader::new(file), &mut out)
            .with_context(|| format!("failed to normalize {}", path.display()))?;
        debug!(path = %path.display(), lines, "normalized file");
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Normalize `input` one line at a time into `out`. Returns the number of lines.
fn normalize_lines<R: BufRead, W: Write>(
    normalizer: &Normalizer,
    input: R,
    out: &mut W,
) -> io::Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        writeln!(out, "{}", normalizer.normalize(&line))?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_lines(normalizer: &Normalizer, input: &str) -> String {
        let mut out = Vec::new();
        normalize_lines(normalizer, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn normalizes_each_line() {
        let normalizer = Normalizer::default();
        let output = run_lines(&normalizer, "ﾊﾝｶｸｶﾅ\n  すごーーーーい  \r\nＡ１\n");
        assert_eq!(output, "ハンカクカナ\nすごーーい\nA1\n");
    }

    #[test]
    fn counts_lines() {
        let normalizer = Normalizer::default();
        let mut out = Vec::new();
        let count = normalize_lines(&normalizer, Cursor::new("a\n\nb"), &mut out).unwrap();
        assert_eq!(count, 3);
        assert_eq!(out, b"a\n\nb\n");
    }

    #[test]
    fn cli_flags_reach_the_normalizer() {
        let cli = Cli::parse_from([
            "neologdn",
            "--repeat",
            "1",
            "--preserve-latin-width",
            "--whitespace",
            "strip",
        ]);
        assert_eq!(cli.repeat, 1);
        assert!(cli.preserve_latin_width);
        assert_eq!(WhitespacePolicy::from(cli.whitespace), WhitespacePolicy::Strip);
        assert!(cli.files.is_empty());
    }

    #[test]
    fn zero_repeat_is_a_config_error() {
        let cli = Cli::parse_from(["neologdn", "--repeat", "0", "missing.txt"]);
        let err = run(&cli).unwrap_err();
        assert_eq!(err.to_string(), "invalid normalization options");
    }
}
