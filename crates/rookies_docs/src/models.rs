//! Google Drive and Docs JSON models.
//!
//! Response types model only what the bot reads. Request types serialize to
//! the `batchUpdate` wire format, one variant per request kind.

use serde::{Deserialize, Serialize};

/// Drive v3 file metadata returned by `files/{id}/copy`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct DriveFile {
    /// File ID
    id: String,
    /// File name
    #[serde(default)]
    name: String,
}

/// Docs v1 document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document ID
    #[serde(default)]
    document_id: String,
    /// Title
    #[serde(default)]
    title: String,
    /// Main body
    #[serde(default)]
    body: Body,
}

/// Document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Body {
    /// Top level elements in document order
    #[serde(default)]
    content: Vec<StructuralElement>,
}

/// Paragraph, table, section break, ...
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    /// Omitted by the API for the first element, which starts at 0
    #[serde(default)]
    start_index: i64,
    /// Exclusive end index
    #[serde(default)]
    end_index: i64,
    /// Set when the element is a paragraph
    #[serde(default)]
    paragraph: Option<Paragraph>,
}

/// Paragraph content and style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Runs of text and inline objects
    #[serde(default)]
    elements: Vec<ParagraphElement>,
    /// Paragraph style
    #[serde(default)]
    paragraph_style: Option<ParagraphStyle>,
}

/// Element of a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    /// Set when the element is text
    #[serde(default)]
    text_run: Option<TextRun>,
}

/// Run of text sharing one style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TextRun {
    /// Text, including any trailing newline
    #[serde(default)]
    content: String,
}

/// Paragraph style, read from documents and sent in style updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    /// `NORMAL_TEXT`, `HEADING_3`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<String>,
    /// First line indent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_first_line: Option<Dimension>,
    /// Indent of the rest of the paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_start: Option<Dimension>,
    /// `COLLAPSE_LISTS` or `NEVER_COLLAPSE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_mode: Option<String>,
    /// Text direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl ParagraphStyle {
    /// Style with only the named style type set.
    pub fn named(style: impl Into<String>) -> Self {
        Self {
            named_style_type: Some(style.into()),
            ..Default::default()
        }
    }
}

/// A length with a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Length
    pub magnitude: f64,
    /// Only `PT` is used
    pub unit: String,
}

impl Dimension {
    /// Length in points.
    pub fn points(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: "PT".to_string(),
        }
    }
}

/// Half-open range of UTF-16 code units in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// Inclusive start
    pub start_index: i64,
    /// Exclusive end
    pub end_index: i64,
}

/// Position in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// UTF-16 index
    pub index: i64,
}

/// Insert text at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertTextRequest {
    /// Where to insert
    pub location: Location,
    /// What to insert
    pub text: String,
}

/// Turn paragraphs in a range into a bulleted list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraphBulletsRequest {
    /// Paragraphs to bullet
    pub range: Range,
    /// Glyph preset, e.g. `BULLET_DISC_CIRCLE_SQUARE`
    pub bullet_preset: String,
}

/// Remove bullets from paragraphs in a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteParagraphBulletsRequest {
    /// Paragraphs to un-bullet
    pub range: Range,
}

/// Restyle paragraphs in a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphStyleRequest {
    /// Paragraphs to restyle
    pub range: Range,
    /// New style
    pub paragraph_style: ParagraphStyle,
    /// Field mask, `*` for every field
    pub fields: String,
}

/// Text to search for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstringMatchCriteria {
    /// Search text
    pub text: String,
    /// Case sensitive match
    pub match_case: bool,
}

/// Replace every occurrence of some text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAllTextRequest {
    /// What to replace
    pub contains_text: SubstringMatchCriteria,
    /// Replacement
    pub replace_text: String,
}

/// One entry of a `documents/{id}:batchUpdate` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocRequest {
    /// Insert text
    InsertText(InsertTextRequest),
    /// Add bullets
    CreateParagraphBullets(CreateParagraphBulletsRequest),
    /// Remove bullets
    DeleteParagraphBullets(DeleteParagraphBulletsRequest),
    /// Restyle paragraphs
    UpdateParagraphStyle(UpdateParagraphStyleRequest),
    /// Replace text everywhere
    ReplaceAllText(ReplaceAllTextRequest),
}

/// Body of `documents/{id}:batchUpdate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchUpdateRequest<'a> {
    /// Requests applied in order
    pub requests: &'a [DocRequest],
}

/// Response of `documents/{id}:batchUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    /// Updated document
    #[serde(default)]
    document_id: String,
    /// One reply per request, mostly empty objects
    #[serde(default)]
    replies: Vec<serde_json::Value>,
}
