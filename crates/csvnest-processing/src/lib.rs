//! Filename-heuristic metadata pipeline
//!
//! filename → normalized phrase → keywords and title → platform record.
//! Everything here is pure string shaping; nothing inspects file contents.

pub mod analyzer;
pub mod classifier;
pub mod keywords;
pub mod mapper;
pub mod normalizer;
pub mod title;

pub use analyzer::{generate_from_filename, AnalysisError, FilenameAnalyzer, MetadataAnalyzer};
pub use classifier::{classify_kind, intake_file, is_accepted_extension};
pub use keywords::{build_keywords, parse_bulk_keywords, unique_case_insensitive};
pub use mapper::{map_record, map_records, platform_headers};
pub use normalizer::normalize_filename;
pub use title::{build_title, clamp_title};
