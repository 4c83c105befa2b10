//! CSV encoding and ZIP bundling of export records

mod service;

pub use service::{create_export_archive, create_zip_archive, encode_csv, write_archive, ExportArchive};
