//! `batchUpdate` request building for the drivers' briefing.
//!
//! The penalty section is spliced in ahead of the template's stream heading.
//! Every insert targets that one index, so each insert pushes the previous
//! ones down: requests are emitted last paragraph first.

use crate::models::{
    CreateParagraphBulletsRequest, DeleteParagraphBulletsRequest, Dimension, DocRequest, Document,
    InsertTextRequest, Location, ParagraphStyle, Range, ReplaceAllTextRequest,
    SubstringMatchCriteria, UpdateParagraphStyleRequest,
};
use rookies_config::Round;
use rookies_core::{CategoryPenalties, Driver, Penalties};
use rookies_error::{DocsError, DocsErrorKind};
use tracing::{debug, error};

/// Text the anchor heading starts with.
pub const ANCHOR_PREFIX: &str = "Stream";

/// Title of the inserted section.
pub const SECTION_HEADING: &str = "Drivers Serving Penalties Tonight";

const BULLET_PRESET: &str = "BULLET_DISC_CIRCLE_SQUARE";

/// Start index of the last `HEADING_3` paragraph whose first text run starts
/// with [`ANCHOR_PREFIX`].
pub fn find_anchor(doc: &Document) -> Result<i64, DocsError> {
    let anchor = doc
        .body()
        .content()
        .iter()
        .filter(|element| {
            let Some(paragraph) = element.paragraph() else {
                return false;
            };
            let is_h3 = paragraph
                .paragraph_style()
                .as_ref()
                .and_then(|style| style.named_style_type.as_deref())
                == Some("HEADING_3");
            let starts_with_anchor = paragraph
                .elements()
                .first()
                .and_then(|element| element.text_run().as_ref())
                .is_some_and(|run| run.content().starts_with(ANCHOR_PREFIX));
            is_h3 && starts_with_anchor
        })
        .map(|element| *element.start_index())
        .last();

    match anchor {
        Some(index) => {
            debug!(index, "Found penalty section anchor");
            Ok(index)
        }
        None => {
            error!(document_id = %doc.document_id(), "Briefing template has no anchor heading");
            Err(DocsError::new(DocsErrorKind::AnchorNotFound(
                ANCHOR_PREFIX.to_string(),
            )))
        }
    }
}

/// Length of `text` in UTF-16 code units, the unit document indices use.
pub fn utf16_len(text: &str) -> i64 {
    text.encode_utf16().count() as i64
}

/// Bullet text for one driver, e.g. `#007 - Jane Doe (carried over)`.
pub fn entry_text(driver: &Driver, carried_over: bool) -> String {
    let suffix = if carried_over { " (carried over)" } else { "" };
    format!(
        "#{:03} - {} {}{}\n",
        driver.car_number(),
        driver.first_name(),
        driver.last_name(),
        suffix
    )
}

/// Requests inserting the penalty section at `anchor`.
///
/// In the finished document the section reads: the section heading, then for
/// each category its heading followed by carried over drivers, new drivers,
/// or `None!`.
pub fn penalty_section_requests(anchor: i64, penalties: &Penalties) -> Vec<DocRequest> {
    let mut requests = Vec::new();
    for (category, entry) in penalties.iter().collect::<Vec<_>>().into_iter().rev() {
        for line in category_lines(entry).iter().rev() {
            requests.extend(bullet(anchor, line));
        }
        requests.extend(heading(
            anchor,
            "HEADING_4",
            &format!("{}\n", category.heading()),
        ));
    }
    requests.extend(heading(anchor, "HEADING_3", &format!("{}\n", SECTION_HEADING)));
    requests
}

fn category_lines(entry: &CategoryPenalties) -> Vec<String> {
    if entry.is_empty() {
        return vec!["None!\n".to_string()];
    }
    entry
        .entries()
        .map(|(driver, carried_over)| entry_text(driver, carried_over))
        .collect()
}

/// Case sensitive replacements for the template's placeholders.
///
/// `[group1]` and `[group2]` are `ODD` and `EVEN`, swapped on even rounds.
pub fn placeholder_requests(round: &Round, season: &str, briefing_display: &str) -> Vec<DocRequest> {
    let (group1, group2) = if round.number % 2 == 0 {
        ("EVEN", "ODD")
    } else {
        ("ODD", "EVEN")
    };

    vec![
        replace_text("[num]", &round.number.to_string()),
        replace_text("[Track Name]", &round.track),
        replace_text("[group1]", group1),
        replace_text("[group2]", group2),
        replace_text("[briefing time]", briefing_display),
        replace_text("[SEASON]", season),
    ]
}

/// Every request turning the copied template into this round's briefing.
pub fn briefing_requests(
    doc: &Document,
    round: &Round,
    penalties: &Penalties,
    season: &str,
    briefing_display: &str,
) -> Result<Vec<DocRequest>, DocsError> {
    let anchor = find_anchor(doc)?;
    let mut requests = penalty_section_requests(anchor, penalties);
    requests.extend(placeholder_requests(round, season, briefing_display));
    Ok(requests)
}

fn insert_range(anchor: i64, text: &str) -> Range {
    Range {
        start_index: anchor,
        end_index: anchor + utf16_len(text),
    }
}

fn insert(anchor: i64, text: &str) -> DocRequest {
    DocRequest::InsertText(InsertTextRequest {
        location: Location { index: anchor },
        text: text.to_string(),
    })
}

fn heading(anchor: i64, style: &str, text: &str) -> [DocRequest; 3] {
    let range = insert_range(anchor, text);
    [
        insert(anchor, text),
        DocRequest::DeleteParagraphBullets(DeleteParagraphBulletsRequest { range }),
        DocRequest::UpdateParagraphStyle(UpdateParagraphStyleRequest {
            range,
            paragraph_style: ParagraphStyle::named(style),
            fields: "*".to_string(),
        }),
    ]
}

fn bullet(anchor: i64, text: &str) -> [DocRequest; 3] {
    let range = insert_range(anchor, text);
    [
        insert(anchor, text),
        DocRequest::CreateParagraphBullets(CreateParagraphBulletsRequest {
            range,
            bullet_preset: BULLET_PRESET.to_string(),
        }),
        DocRequest::UpdateParagraphStyle(UpdateParagraphStyleRequest {
            range,
            paragraph_style: ParagraphStyle {
                named_style_type: Some("NORMAL_TEXT".to_string()),
                indent_first_line: Some(Dimension::points(18.0)),
                indent_start: Some(Dimension::points(36.0)),
                spacing_mode: Some("COLLAPSE_LISTS".to_string()),
                direction: Some("LEFT_TO_RIGHT".to_string()),
            },
            fields: "*".to_string(),
        }),
    ]
}

fn replace_text(find: &str, replace: &str) -> DocRequest {
    DocRequest::ReplaceAllText(ReplaceAllTextRequest {
        contains_text: SubstringMatchCriteria {
            text: find.to_string(),
            match_case: true,
        },
        replace_text: replace.to_string(),
    })
}
