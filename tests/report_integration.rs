//! Integration tests for report output.
//!
//! These tests write reports to real files, the way the CLI's `--output` does.

use std::fs::{self, File};
use std::io::{BufWriter, Write};

use pagesim::fixtures;
use pagesim::report::{write_comparison, write_sweep, write_trace};
use pagesim::{compare, run, sweep, Policy};
use tempfile::tempdir;

/// A trace written to disk reads back with one row per reference.
#[test]
fn test_trace_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.txt");
    let reference = fixtures::standard().pages;

    {
        let mut out = BufWriter::new(File::create(&path).unwrap());
        let result = run(Policy::Optimal, &reference, 3).unwrap();
        write_trace(&mut out, &result).unwrap();
        out.flush().unwrap();
    }

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("===== Optimal Page Replacement Trace ====="));

    let rows: Vec<&str> = text
        .lines()
        .filter(|line| line.ends_with("| Yes") || line.ends_with("| No"))
        .collect();
    assert_eq!(rows.len(), reference.len());
    assert_eq!(rows.iter().filter(|row| row.ends_with("| Yes")).count(), 9);
}

/// Several reports appended to one file, as `pagesim compare` does.
#[test]
fn test_comparison_and_sweep_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.txt");
    let reference = fixtures::belady().pages;

    {
        let mut out = BufWriter::new(File::create(&path).unwrap());
        let comparison = compare(&reference, 3).unwrap();
        write_comparison(&mut out, &reference, &comparison).unwrap();
        writeln!(out).unwrap();

        let table = sweep(&reference, &[3, 4, 5], &Policy::ALL).unwrap();
        write_sweep(&mut out, &table).unwrap();
    }

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("Reference String: [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]"));
    assert!(text.contains("LRU       |          10 |"));
    assert!(text.contains("     5 |       5 |       5 |       5"));
    assert_eq!(text.matches("Belady's Anomaly detected").count(), 1);
}
