//! # elflog
//!
//! Parser for EurekaLog crash reports (`*.el`) with typed section records.
//!
//! ## Overview
//!
//! A crash report is plain text split into named sections (`Exception:`,
//! `Call Stack Information:`, `Modules Information:`, ...). Each section uses one of a
//! handful of layouts:
//!
//! - **Key/value blocks**: numbered `2.5 Type : EAccessViolation` lines
//! - **Pipe tables**: `|00400000|Project.exe |...|` rows under a title row
//! - **Call stack**: a divider-separated preamble, thread summary and frame table
//! - **Network**: a sideways table with one line per attribute and one column per interface
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  segment()  ┌─────────────┐  SectionParser  ┌────────────┐
//! │ .el file or  │ ──────────► │ RawSections │ ──────────────► │ ParsedLog  │
//! │ attachment   │             │ name → lines│   + SCHEMAS     │ raw/parsed │
//! └──────────────┘             └─────────────┘                 └────────────┘
//! ```
//!
//! - [`schema`] holds the static field layout of every known section and the label
//!   sanitizing rules.
//! - [`segmenter`] splits the text on section headers.
//! - [`sections`] holds one [`SectionParser`](sections::SectionParser) per layout and the
//!   [`ParserRegistry`](sections::ParserRegistry) that dispatches to them.
//! - [`ParsedLog`] exposes lookup by header text or canonical name.
//!
//! ## Examples
//!
//! ```
//! use elflog::ElfParser;
//!
//! let report = "EurekaLog 7.7\n\
//!               User:\n\
//!               ---------\n\
//!               \x20 3.1 ID   : 1001\n\
//!               \x20 3.2 Name : carol\n";
//!
//! let log = ElfParser::new().parse(report);
//! let user = log.record(elflog::Section::User)?;
//! assert_eq!(user.get("id_"), Some("1001"));
//! assert_eq!(user.get("name"), Some("carol"));
//! # Ok::<(), elflog::ElfError>(())
//! ```
//!
//! ### Exporting to JSON
//!
//! ```no_run
//! use elflog::ElfParser;
//! use std::path::Path;
//!
//! let log = ElfParser::new().parse_path(Path::new("BugReport.el"))?;
//! let json = serde_json::to_string_pretty(&log.all_sections(false))?;
//! println!("{}", json);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod parsed;
pub mod parser;
pub mod record;
pub mod schema;
pub mod sections;
pub mod segmenter;
pub mod source;


pub use config::ParseOptions;
pub use error::{ElfError, Result};
pub use parsed::{ParsedLog, SectionView, SectionsView};
pub use parser::ElfParser;
pub use record::{CallStack, ParsedSection, Record};
pub use schema::{SCHEMAS, Section, SectionSchema, sanitize};
pub use segmenter::RawSection;
