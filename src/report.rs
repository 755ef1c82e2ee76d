//! Rendering benchmark results.
//!
//! Text is what a person reads at the terminal:
//!
//! ```text
//! Matrix size: 64x64
//!   i-j-k: 0.0003s ± 0.0000s
//!   i-k-j: 0.0001s ± 0.0000s
//!   Speedup: 2.41x
//! ```
//!
//! JSON and CSV carry the same numbers for scripts.

use std::io::{self, Write};

use crate::harness::{KernelReport, SizeReport};

pub const CSV_HEADER: &str =
    "algorithm,size,mean_time_s,std_time_s,min_time_s,max_time_s,gflops,speedup";

/// Write one size's block of text.
///
/// With two kernels the ratio line is a bare `Speedup:`; with more, each
/// non-baseline kernel gets its own line naming it.
pub fn write_size_text<W: Write>(w: &mut W, report: &SizeReport) -> io::Result<()> {
    writeln!(w, "Matrix size: {}x{}", report.size, report.size)?;
    for k in &report.kernels {
        writeln!(
            w,
            "  {}: {:.4}s ± {:.4}s",
            k.kernel, k.summary.mean, k.summary.stddev
        )?;
    }

    let compared: Vec<&KernelReport> = report
        .kernels
        .iter()
        .filter(|k| k.speedup.is_some())
        .collect();
    for k in &compared {
        let ratio = k.speedup.unwrap_or_default();
        if compared.len() == 1 {
            writeln!(w, "  Speedup: {:.2}x", ratio)?;
        } else {
            writeln!(w, "  Speedup ({}): {:.2}x", k.kernel, ratio)?;
        }
    }
    Ok(())
}

/// Write every size, separated by blank lines.
pub fn write_text<W: Write>(w: &mut W, reports: &[SizeReport]) -> io::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        write_size_text(w, report)?;
    }
    Ok(())
}

pub fn to_text(reports: &[SizeReport]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec never fails.
    let _ = write_text(&mut buf, reports);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Pretty-printed JSON array, one object per size.
pub fn to_json(reports: &[SizeReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

pub fn write_csv<W: Write>(w: &mut W, reports: &[SizeReport]) -> io::Result<()> {
    writeln!(w, "{}", CSV_HEADER)?;
    for report in reports {
        for k in &report.kernels {
            write_csv_row(w, report.size, k)?;
        }
    }
    Ok(())
}

fn write_csv_row<W: Write>(w: &mut W, size: usize, k: &KernelReport) -> io::Result<()> {
    let speedup = k.speedup.map(|s| s.to_string()).unwrap_or_default();
    writeln!(
        w,
        "{},{},{},{},{},{},{},{}",
        csv_field(&k.kernel),
        size,
        k.summary.mean,
        k.summary.stddev,
        k.summary.min,
        k.summary.max,
        k.gflops,
        speedup
    )
}

/// Quote a field if it contains anything CSV treats specially.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
