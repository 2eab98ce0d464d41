//! Export: turns a rendered resume (and its record) into a downloadable file.
//!
//! Formats:
//! - `html`: standalone document around the rendered markup
//! - `print`: the same document plus print CSS and an auto-print script
//! - `markdown` / `text`: built from the record, independent of the layout
//! - `json`: the record itself

mod document;
mod text;

use std::str::FromStr;

use thiserror::Error;

use crate::errors::AppError;
use crate::models::ResumeData;

pub use document::{print_document, standalone_document};
pub use text::{Markdown, PlainText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Print,
    Markdown,
    Json,
    Text,
}

#[derive(Debug, Error)]
#[error("Unsupported export format '{0}' (expected html, print, markdown, json or text)")]
pub struct UnsupportedFormat(pub String);

impl From<UnsupportedFormat> for AppError {
    fn from(err: UnsupportedFormat) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl FromStr for ExportFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "print" => Ok(Self::Print),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(UnsupportedFormat(s.to_string())),
        }
    }
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html | Self::Print => "html",
            Self::Markdown => "md",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Html | Self::Print => "text/html; charset=utf-8",
            Self::Markdown => "text/markdown; charset=utf-8",
            Self::Json => "application/json",
            Self::Text => "text/plain; charset=utf-8",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

impl ExportedFile {
    /// `attachment` disposition with an ASCII fallback name and the exact
    /// UTF-8 name in `filename*`.
    pub fn content_disposition(&self) -> String {
        let ascii: String = self
            .filename
            .chars()
            .map(|c| if c.is_ascii() && c != '"' { c } else { '_' })
            .collect();
        format!(
            "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
            percent_encode(&self.filename)
        )
    }
}

/// Builds the file for `format`. `rendered_html` is only used by the document formats.
pub fn export(
    format: ExportFormat,
    rendered_html: &str,
    data: &ResumeData,
) -> Result<ExportedFile, serde_json::Error> {
    let body = match format {
        ExportFormat::Html => standalone_document(&data.full_name, rendered_html),
        ExportFormat::Print => print_document(&data.full_name, rendered_html),
        ExportFormat::Markdown => Markdown(data).to_string(),
        ExportFormat::Json => serde_json::to_string_pretty(data)?,
        ExportFormat::Text => PlainText(data).to_string(),
    };

    Ok(ExportedFile {
        filename: download_filename(&data.full_name, format.extension()),
        content_type: format.content_type(),
        body,
    })
}

/// `{name with whitespace runs as "_"}_resume.{ext}`, or `resume.{ext}` without a name.
pub fn download_filename(full_name: &str, extension: &str) -> String {
    let stem: String = full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() {
        format!("resume.{extension}")
    } else {
        format!("{stem}_resume.{extension}")
    }
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
