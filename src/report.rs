//! Plain-text reports of simulation results.
//!
//! Every function writes to any [`io::Write`], so the same report can go to
//! stdout, a file, or a `Vec<u8>` in tests.

use std::fmt::Display;
use std::io;

use crate::common::{Page, Result};
use crate::sim::{Comparison, FaultTable, SimulationResult};

/// Width of the separator rule under table headers.
const RULE_WIDTH: usize = 60;

/// Render pages as `[7, 0, 1]`.
pub fn format_pages<P: Display>(pages: &[P]) -> String {
    let items: Vec<String> = pages.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Write a step-by-step trace of one run.
///
/// One row per reference: 1-based step, the page, the frames *after* the
/// reference, and whether it faulted.
pub fn write_trace<W, P>(w: &mut W, result: &SimulationResult<P>) -> Result<()>
where
    W: io::Write,
    P: Page + Display,
{
    let reference: Vec<&P> = result.steps.iter().map(|step| &step.page).collect();

    writeln!(w, "===== {} Page Replacement Trace =====", result.policy)?;
    writeln!(w, "Reference String: {}", format_pages(&reference))?;
    writeln!(w, "Frames: {}", result.capacity)?;
    writeln!(w)?;
    writeln!(w, "Step | Page | Frames               | Page Fault")?;
    writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;

    for (i, step) in result.steps.iter().enumerate() {
        let frames_after = format_pages(&result.history[i + 1]);
        let fault = if step.fault { "Yes" } else { "No" };
        writeln!(
            w,
            "{:>4} | {:>4} | {:<20} | {}",
            i + 1,
            step.page.to_string(),
            frames_after,
            fault
        )?;
    }

    writeln!(w)?;
    writeln!(w, "{}", result.stats())?;
    Ok(())
}

/// Write the fault/hit table for every policy in `comparison`.
pub fn write_comparison<W, P>(w: &mut W, reference: &[P], comparison: &Comparison<P>) -> Result<()>
where
    W: io::Write,
    P: Page + Display,
{
    writeln!(w, "===== Performance Comparison =====")?;
    writeln!(w, "Reference String: {}", format_pages(reference))?;
    writeln!(w, "Frame Count: {}", comparison.capacity)?;
    writeln!(w)?;
    writeln!(w, "Algorithm | Page Faults | Fault Rate | Hit Rate")?;
    writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;

    for result in &comparison.results {
        let stats = result.stats();
        writeln!(
            w,
            "{:<9} | {:>11} | {:>9.2}% | {:>7.2}%",
            result.policy,
            stats.faults,
            stats.fault_rate() * 100.0,
            stats.hit_rate() * 100.0
        )?;
    }
    Ok(())
}

/// Write a capacity-by-policy fault table followed by any Belady's anomalies.
pub fn write_sweep<W: io::Write>(w: &mut W, table: &FaultTable) -> Result<()> {
    let policies = table.policies();

    writeln!(w, "===== Page Faults vs Frame Size =====")?;
    write!(w, "{:>6}", "Frames")?;
    for policy in &policies {
        write!(w, " | {:>7}", policy)?;
    }
    writeln!(w)?;
    writeln!(w, "{}", "-".repeat(6 + 10 * policies.len()))?;

    for (capacity, row) in table.rows() {
        write!(w, "{:>6}", capacity)?;
        for policy in &policies {
            match row.get(policy) {
                Some(faults) => write!(w, " | {:>7}", faults)?,
                None => write!(w, " | {:>7}", "-")?,
            }
        }
        writeln!(w)?;
    }

    writeln!(w)?;
    let mut found = false;
    for &policy in &policies {
        for report in table.anomalies(policy) {
            found = true;
            writeln!(w, "Belady's Anomaly detected in {}: {}", policy, report)?;
        }
    }
    if !found {
        writeln!(w, "No Belady's anomaly detected.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Policy;
    use crate::sim::{compare, run, sweep};

    const BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_pages() {
        assert_eq!(format_pages::<u32>(&[]), "[]");
        assert_eq!(format_pages(&[7, 0, 1]), "[7, 0, 1]");
    }

    #[test]
    fn test_trace() {
        let result = run(Policy::Fifo, &[1, 2, 1, 3], 2).unwrap();
        let text = render(|w| write_trace(w, &result));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "===== FIFO Page Replacement Trace =====");
        assert_eq!(lines[1], "Reference String: [1, 2, 1, 3]");
        assert_eq!(lines[6], "   1 |    1 | [1]                  | Yes");
        assert_eq!(lines[8], "   3 |    1 | [1, 2]               | No");
        assert_eq!(lines[9], "   4 |    3 | [2, 3]               | Yes");
        assert!(text.contains("faults: 3"));
    }

    #[test]
    fn test_comparison() {
        let comparison = compare(&BELADY, 3).unwrap();
        let text = render(|w| write_comparison(w, &BELADY, &comparison));

        assert!(text.contains("Frame Count: 3"));
        assert!(text.contains("FIFO      |           9 |     75.00% |   25.00%"));
        assert!(text.contains("Optimal   |           7 |"));
    }

    #[test]
    fn test_sweep_report() {
        let table = sweep(&BELADY, &[3, 4], &Policy::ALL).unwrap();
        let text = render(|w| write_sweep(w, &table));

        assert!(text.contains("Frames |    FIFO |     LRU | Optimal"));
        assert!(text.contains("     4 |      10 |       8 |       6"));
        assert!(text.contains(concat!(
            "Belady's Anomaly detected in FIFO: ",
            "increasing frames from 3 to 4 increased page faults from 9 to 10"
        )));
    }

    #[test]
    fn test_sweep_report_without_anomaly() {
        let table = sweep(&BELADY, &[3, 4], &[Policy::Lru]).unwrap();
        let text = render(|w| write_sweep(w, &table));

        assert!(text.contains("No Belady's anomaly detected."));
        assert!(!text.contains("FIFO"));
    }
}
