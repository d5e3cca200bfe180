use crate::error::{Result, ScrapeError};
use crate::results::ProductRecord;
use html_escape::encode_text;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const STYLE: &str = "\
        body { font-family: sans-serif; line-height: 1.6; padding: 20px; }
        .product-entry { border-bottom: 1px solid #ccc; margin-bottom: 20px; padding-bottom: 20px; }
        h2 { color: #333; }
        p { color: #666; }";

/// Renders the complete report document
///
/// Titles and descriptions are escaped as element content. Newlines inside a
/// description are left as they are.
pub fn render_report(title: &str, records: &[ProductRecord]) -> String {
    let title = encode_text(title);
    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{STYLE}
    </style>
</head>
<body>
    <h1>{title}</h1>
"#
    );

    for record in records {
        // Writing into a String cannot fail
        let _ = write!(
            html,
            r#"
    <div class="product-entry">
        <h2>{}</h2>
        <p>{}</p>
    </div>
"#,
            encode_text(record.title()),
            encode_text(record.description())
        );
    }

    html.push_str("\n</body>\n</html>\n");
    html
}

/// Writes the report to `path` in one pass, replacing any existing file
///
/// Returns the absolute path that was written.
pub fn write_report(path: &Path, title: &str, records: &[ProductRecord]) -> Result<PathBuf> {
    ::log::info!("Writing scraped data to {}...", path.display());

    let html = render_report(title, records);
    std::fs::write(path, html).map_err(|source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let written = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    ::log::info!("Successfully saved data to {}", written.display());
    Ok(written)
}
