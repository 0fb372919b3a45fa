use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use textplots::Plot;

use crate::import::{ImportResult, MalformedRow};
use ploppo_core::models::{
    AnalysisReport, Draw, FrequencyResult, GapResult, ParitySplitResult, RangeBucketResult,
    RepeatResult,
};

const BAR_WIDTH: usize = 40;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn bar(value: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value as f64 / max as f64 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.max(usize::from(value > 0)))
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Dataset loaded:");
    println!("  Rows read       : {}", result.total_records);
    println!("  Draws analyzed  : {}", result.table.len());
    if !result.malformed.is_empty() {
        println!("  Rows skipped    : {}", result.malformed.len());
        for row in result.malformed.iter().take(5) {
            println!("    line {:>4}: {}", row.line, row.reason);
        }
        if result.malformed.len() > 5 {
            println!("    … and {} more", result.malformed.len() - 5);
        }
    }
}

pub fn display_draws(draws: &[&Draw]) {
    if draws.is_empty() {
        println!("No draws to display.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Line", "Numbers", "Sorted"]);

    for draw in draws {
        let as_text = |numbers: &[u32]| {
            numbers
                .iter()
                .map(|n| format!("{:2}", n))
                .collect::<Vec<_>>()
                .join(" - ")
        };
        table.add_row(vec![
            draw.line.to_string(),
            as_text(&draw.numbers),
            as_text(&draw.sorted()),
        ]);
    }

    println!("{table}");
}

pub fn display_frequency(freq: &FrequencyResult, top: usize) {
    println!("\n🔥 Hot Number Frequency\n");

    if freq.entries.is_empty() {
        println!("  (No numbers drawn)");
        return;
    }

    let max = freq.entries[0].count;
    let mut table = new_table();
    table.set_header(vec!["Number", "Frequency", ""]);
    for entry in &freq.entries {
        table.add_row(vec![
            Cell::new(format!("{:2}", entry.number)),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
            Cell::new(bar(entry.count, max)).fg(Color::Magenta),
        ]);
    }
    println!("{table}");

    println!("\n── Top {} Numbers ──", top.min(freq.entries.len()));
    let mut table = new_table();
    table.set_header(vec!["Rank", "Number", "Frequency"]);
    for (i, entry) in freq.top(top).iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            entry.number.to_string(),
            entry.count.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_parity(parity: &ParitySplitResult) {
    println!("\n⚖️  Odd vs Even Patterns\n");

    let mut table = new_table();
    table.set_header(vec!["Split", "Draws", "Share", ""]);
    for entry in &parity.entries {
        let share = parity.share(entry);
        table.add_row(vec![
            Cell::new(entry.split.to_string()),
            Cell::new(entry.draws).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", share)).set_alignment(CellAlignment::Right),
            Cell::new(bar(entry.draws, parity.total_draws())).fg(Color::Cyan),
        ]);
    }
    println!("{table}");
}

pub fn display_ranges(ranges: &RangeBucketResult) {
    println!("\n🔢 Number Range Patterns\n");
    println!("  Buckets: {}", ranges.boundaries.bucket_labels().join(" | "));

    let mut table = new_table();
    table.set_header(vec!["Range Pattern", "Count"]);
    for pattern in &ranges.patterns {
        table.add_row(vec![
            Cell::new(pattern.label()),
            Cell::new(pattern.draws).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

pub fn display_repeats(repeats: &RepeatResult) {
    println!("\n🔁 Repeated Numbers from Previous Draw\n");

    let dist = repeats.distribution();
    let max = dist.values().copied().max().unwrap_or(0);

    let mut table = new_table();
    table.set_header(vec!["Repeated", "Draws", ""]);
    for (repeat, count) in &dist {
        table.add_row(vec![
            Cell::new(repeat).set_alignment(CellAlignment::Right),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(bar(*count, max)).fg(Color::Green),
        ]);
    }
    println!("{table}");
}

pub fn display_gaps(gaps: &GapResult) {
    println!("\n📏 Average Gap Between Numbers\n");

    let points: Vec<(f32, f32)> = gaps
        .defined()
        .map(|(i, g)| (i as f32, g as f32))
        .collect();

    if points.is_empty() {
        println!("  (No data to display)");
    } else {
        let y_min = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let y_max = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let mean = gaps.mean().unwrap_or_default();

        if points.len() > 1 {
            let x_max = points[points.len() - 1].0;
            let shape = textplots::Shape::Lines(&points);
            let mut chart =
                textplots::Chart::new_with_y_range(120, 40, 0.0, x_max, y_min - 0.5, y_max + 0.5);
            println!("{}", chart.lineplot(&shape));
        }
        println!("  min {:.2} · mean {:.2} · max {:.2}", y_min, mean, y_max);
    }

    let degenerate = gaps.degenerate_rows();
    if degenerate > 0 {
        println!("  {degenerate} draw(s) with fewer than 2 numbers have no average gap");
    }
}

pub fn display_report(report: &AnalysisReport, top: usize) {
    println!("\n🎱 Pattern analysis of {} draws", report.draw_count);

    display_frequency(&report.frequency, top);
    display_parity(&report.parity);
    display_ranges(&report.ranges);
    display_repeats(&report.repeats);
    display_gaps(&report.gaps);

    println!("\nAnalysis complete. Scroll through the results above!");
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    rows_read: usize,
    malformed: &'a [MalformedRow],
    report: &'a AnalysisReport,
}

pub fn display_json(import: &ImportResult, report: &AnalysisReport) -> Result<()> {
    let output = JsonOutput {
        rows_read: import.total_records,
        malformed: &import.malformed,
        report,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
