use anyhow::Result;
use sample_stats::Sample;
use std::io::Write;
use tabwriter::TabWriter;

/// The sample values on one line, at fixed precision.
pub fn print_values(out: &mut impl Write, sample: &Sample) -> Result<()> {
    write!(out, "data:")?;
    for x in sample.values() {
        write!(out, " {:.4}", x)?;
    }
    writeln!(out)?;
    Ok(())
}

/// The per-element working: value, deviation from the mean, and its square.
pub fn print_deviation_table(out: impl Write, sample: &Sample) -> Result<()> {
    let mut out = TabWriter::new(out);
    writeln!(out, "N\tsource\td\td²")?;
    let deviations = sample.deviations_from_mean();
    for (i, (x, d)) in sample.values().iter().zip(&deviations).enumerate() {
        writeln!(out, "{}\t{:.4}\t{:.4}\t{:.4}", i, x, d, d * d)?;
    }
    out.flush()?;
    Ok(())
}

pub fn print_summary(out: &mut impl Write, sample: &Sample, confidence: f64) -> Result<()> {
    let ci = sample.confidence_interval_for_mean(confidence);
    writeln!(out, "mean: {:.4}", ci.center)?;
    writeln!(
        out,
        "X is {:.4} .. {:.4} (p={}%)",
        ci.lower(),
        ci.upper(),
        confidence * 100.
    )?;
    Ok(())
}
