mod load;
mod report;

use bpaf::Bpaf;
use std::path::PathBuf;

/// Descriptive statistics for a semicolon-delimited measurement file
#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
struct Options {
    /// Two-sided confidence level for the interval around the mean
    #[bpaf(
        argument("LEVEL"),
        guard(in_unit_interval, "must lie strictly between 0 and 1"),
        fallback(0.98),
        display_fallback
    )]
    confidence: f64,
    /// Measurement file: a header line, then `<index>;<measurement>` rows
    #[bpaf(positional("FILE"))]
    file: PathBuf,
}

fn in_unit_interval(confidence: &f64) -> bool {
    *confidence > 0. && *confidence < 1.
}

fn main() {
    env_logger::init();
    let opts = options().run();
    match run(opts) {
        Ok(()) => (),
        Err(e) => {
            // Ignore EPIPE
            if let Some(e) = e.downcast_ref::<std::io::Error>() {
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    return;
                }
            }
            eprintln!("Error: {}", e);
            std::process::exit(1)
        }
    }
}

fn run(opts: Options) -> anyhow::Result<()> {
    let sample = load::load_measurements(&opts.file);
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    report::print_values(&mut stdout, &sample)?;
    report::print_deviation_table(&mut stdout, &sample)?;
    report::print_summary(&mut stdout, &sample, opts.confidence)?;
    Ok(())
}
