//! Package summary reporting
//!
//! A report is a fixed list of artifact records grouped into sections, plus
//! static achievement and instruction lines. `render` writes it line by line
//! to a [`ReportSink`], so the same report can go to the console, a log file,
//! or the tracing subscriber.
//!
//! Sizes are strings like "40.4 KB". A size that cannot be parsed is logged
//! and left out of the total; it never stops the report.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Why a size string was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    #[error("empty size")]
    Empty,

    #[error("unsupported unit in {0:?} (expected KB)")]
    UnsupportedUnit(String),

    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Metadata about one previously created file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub id: u32,
    pub name: String,
    pub size: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ArtifactRecord {
    pub fn new(id: u32, name: &str, size: &str, description: &str, features: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            size: size.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// A titled group of records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub heading: String,
    /// Noun used in the file count line, e.g. "production files"
    pub label: String,
    /// Whether this section's sizes count toward the total
    #[serde(default)]
    pub counted: bool,
    pub records: Vec<ArtifactRecord>,
}

/// A complete summary report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub sections: Vec<ReportSection>,
    /// Extra lines appended to the statistics block
    #[serde(default)]
    pub statistics: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub closing: Vec<String>,
}

/// Rule widths used when rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub banner_width: usize,
    pub rule_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            banner_width: 75,
            rule_width: 40,
        }
    }
}

impl From<&repokit_core::SummaryConfig> for Layout {
    fn from(config: &repokit_core::SummaryConfig) -> Self {
        Self {
            banner_width: config.banner_width,
            rule_width: config.rule_width,
        }
    }
}

/// Sum of parseable sizes, with the names of records that were skipped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeTotal {
    pub total_kb: f64,
    pub skipped: Vec<String>,
}

/// What `render` counted while writing a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStats {
    pub records: usize,
    pub total_kb: f64,
    pub skipped: Vec<String>,
    pub lines: usize,
}

/// Parse a size like "40.4 KB" into kilobytes
pub fn parse_size(size: &str) -> Result<f64, SizeError> {
    let trimmed = size.trim();
    if trimmed.is_empty() {
        return Err(SizeError::Empty);
    }

    let number = match trimmed.len().checked_sub(2) {
        Some(split)
            if trimmed.is_char_boundary(split)
                && trimmed[split..].eq_ignore_ascii_case("kb") =>
        {
            trimmed[..split].trim_end()
        }
        _ => trimmed,
    };

    if number.is_empty() {
        return Err(SizeError::NotANumber(size.to_string()));
    }

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(SizeError::NotANumber(size.to_string())),
        Err(_) => {
            // "2 MB" reads as a number followed by a unit we don't handle
            let has_number_prefix = number
                .split_whitespace()
                .next()
                .map(|head| head.parse::<f64>().is_ok())
                .unwrap_or(false);
            if has_number_prefix {
                Err(SizeError::UnsupportedUnit(size.to_string()))
            } else {
                Err(SizeError::NotANumber(size.to_string()))
            }
        }
    }
}

/// Sum record sizes, warning about and skipping any that don't parse
pub fn total_size<'a, I>(records: I) -> SizeTotal
where
    I: IntoIterator<Item = &'a ArtifactRecord>,
{
    let mut total_kb = 0.0;
    let mut skipped = Vec::new();

    for record in records {
        match parse_size(&record.size) {
            Ok(kb) => total_kb += kb,
            Err(e) => {
                warn!(file = %record.name, error = %e, "Could not parse size for file");
                skipped.push(record.name.clone());
            }
        }
    }

    SizeTotal { total_kb, skipped }
}

/// Destination for report lines
pub trait ReportSink {
    fn line(&mut self, line: &str) -> io::Result<()>;

    fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }
}

/// Writes lines to any `io::Write`
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }
}

/// Writes lines to a file, replacing any previous content
pub struct FileSink {
    path: PathBuf,
    inner: WriterSink<BufWriter<File>>,
}

impl FileSink {
    pub fn create(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            inner: WriterSink::new(BufWriter::new(file)),
        })
    }

    /// Flush buffered lines; dropping without this may lose a write error
    pub fn finish(self) -> io::Result<PathBuf> {
        let mut out = self.inner.into_inner();
        out.flush()?;
        Ok(self.path)
    }
}

impl ReportSink for FileSink {
    fn line(&mut self, line: &str) -> io::Result<()> {
        self.inner.line(line)
    }
}

/// Sends each line to the tracing subscriber at info level
#[derive(Debug, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn line(&mut self, line: &str) -> io::Result<()> {
        info!(target: "repokit::summary", "{}", line);
        Ok(())
    }
}

/// Keeps lines in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl ReportSink for MemorySink {
    fn line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Counts lines on their way to another sink
struct Counting<'a> {
    inner: &'a mut dyn ReportSink,
    lines: usize,
}

impl ReportSink for Counting<'_> {
    fn line(&mut self, line: &str) -> io::Result<()> {
        self.lines += 1;
        self.inner.line(line)
    }
}

fn heading(sink: &mut dyn ReportSink, text: &str, width: usize) -> io::Result<()> {
    sink.line(text)?;
    sink.line(&"-".repeat(width))
}

/// Write a report to a sink
pub fn render(
    report: &Report,
    layout: &Layout,
    sink: &mut dyn ReportSink,
) -> io::Result<ReportStats> {
    let mut sink = Counting { inner: sink, lines: 0 };

    sink.line(&report.title)?;
    sink.line(&"=".repeat(layout.banner_width))?;
    sink.blank()?;

    for section in &report.sections {
        heading(&mut sink, &section.heading, layout.rule_width)?;
        for record in &section.records {
            sink.line(&format!("[{}] {} ({})", record.id, record.name, record.size))?;
            sink.line(&format!("    📝 {}", record.description))?;
            if !record.features.is_empty() {
                sink.line(&format!("    ✨ Features: {}", record.features.join(", ")))?;
            }
            sink.blank()?;
        }
    }

    let totals = total_size(
        report
            .sections
            .iter()
            .filter(|s| s.counted)
            .flat_map(|s| s.records.iter()),
    );

    let counts: Vec<String> = report
        .sections
        .iter()
        .map(|s| format!("{} {}", s.records.len(), s.label))
        .collect();

    heading(&mut sink, "📊 PACKAGE STATISTICS:", layout.rule_width)?;
    if !counts.is_empty() {
        sink.line(&format!("📁 Total Files: {}", counts.join(" + ")))?;
    }
    sink.line(&format!("💾 Total Size: {:.1} KB optimized package", totals.total_kb))?;
    for line in &report.statistics {
        sink.line(line)?;
    }
    sink.blank()?;

    if !report.achievements.is_empty() {
        heading(&mut sink, "🏆 REVOLUTIONARY ACHIEVEMENTS:", layout.rule_width)?;
        for achievement in &report.achievements {
            sink.line(&format!("   ✅ {}", achievement))?;
        }
        sink.blank()?;
    }

    if !report.instructions.is_empty() {
        heading(&mut sink, "🎯 DEPLOYMENT INSTRUCTIONS:", layout.rule_width)?;
        for (i, step) in report.instructions.iter().enumerate() {
            sink.line(&format!("{}. {}", i + 1, step))?;
        }
        sink.blank()?;
    }

    for line in &report.closing {
        sink.line(line)?;
    }

    Ok(ReportStats {
        records: report.sections.iter().map(|s| s.records.len()).sum(),
        total_kb: totals.total_kb,
        skipped: totals.skipped,
        lines: sink.lines,
    })
}
