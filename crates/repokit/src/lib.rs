//! repokit - repository files for the Ultimate Hyperfocus Constellation
//!
//! Writes the project's community docs, license, package manifest, GitHub
//! workflow and issue templates, and SEO script from text embedded in the
//! binary, and prints a summary of the production package.
//!
//! There is no templating: every file is written exactly as declared.

pub mod artifact;
pub mod catalog;
pub mod emitter;
pub mod report;
pub mod summary;

pub use artifact::{Artifact, ArtifactSet};
pub use catalog::{catalog, Bundle};
pub use emitter::{EmitError, Emitter, PlannedWrite};
pub use report::{
    parse_size, render, total_size, ArtifactRecord, FileSink, Layout, MemorySink, Report,
    ReportSection, ReportSink, ReportStats, SizeError, TracingSink, WriterSink,
};
pub use summary::constellation_report;
