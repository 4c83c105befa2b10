//! Platform record mapping
//!
//! One exhaustive match over [`Platform`]. Each arm is a fixed projection of
//! the generated metadata and file facts; no escaping happens here (the CSV
//! writer owns quoting).

use csvnest_core::models::{
    FileKind, GeneratedMetadata, ImageType, Platform, PlatformRecord, UploadedFile,
};

/// Map one file and its generated metadata to the schema of `platform`.
pub fn map_record(
    file: &UploadedFile,
    metadata: &GeneratedMetadata,
    platform: Platform,
    image_type: ImageType,
) -> PlatformRecord {
    let filename = file.name.clone();
    let title = metadata.title.clone();
    let keywords = metadata.keywords.join(", ");

    let fields = match platform {
        Platform::AdobeStock => vec![
            ("Filename", filename),
            ("Title", title),
            ("Keywords", keywords),
            ("Category", String::new()),
            ("Releases", String::new()),
            (
                "Illustration",
                if image_type == ImageType::Vector {
                    "Yes".to_string()
                } else {
                    String::new()
                },
            ),
        ],
        Platform::Freepik => vec![
            ("file", filename),
            ("title", title),
            ("tags", keywords),
            ("license", "standard".to_string()),
            ("type", image_type.as_str().to_lowercase()),
        ],
        Platform::Shutterstock => vec![
            ("Filename", filename),
            ("Description", title),
            ("Keywords", keywords),
            ("Editorial", "no".to_string()),
            ("Category", String::new()),
        ],
        Platform::Vecteezy => vec![
            ("file_name", filename),
            ("title", title),
            ("keywords", keywords),
            ("media_type", file.kind.as_str().to_lowercase()),
        ],
        Platform::General => vec![
            ("filename", filename),
            ("title", title),
            ("keywords", keywords),
            ("media_type", file.kind.as_str().to_string()),
        ],
    };

    PlatformRecord::new(fields)
}

/// Map every (file, metadata) pair in order.
pub fn map_records<'a, I>(entries: I, platform: Platform, image_type: ImageType) -> Vec<PlatformRecord>
where
    I: IntoIterator<Item = (&'a UploadedFile, &'a GeneratedMetadata)>,
{
    entries
        .into_iter()
        .map(|(file, metadata)| map_record(file, metadata, platform, image_type))
        .collect()
}

/// Header row for a platform, independent of any data.
pub fn platform_headers(platform: Platform) -> Vec<&'static str> {
    let probe = UploadedFile::new("", "", FileKind::Other);
    let metadata = GeneratedMetadata {
        file_id: probe.id,
        title: String::new(),
        keywords: Vec::new(),
    };
    map_record(&probe, &metadata, platform, ImageType::None).headers()
}
