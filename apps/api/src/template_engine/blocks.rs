//! Repeat-block expansion for experience and education entries.
//!
//! A block is the fragment between a start and an end marker comment. Each
//! entity kind accepts two marker spellings:
//!
//! ```text
//! <!-- START_EXPERIENCE_LOOP --> ... <!-- END_EXPERIENCE_LOOP -->
//! <!-- EXPERIENCE_LOOP_START --> ... <!-- EXPERIENCE_LOOP_END -->
//! ```
//!
//! Markers are case-insensitive and may carry whitespace inside the comment.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use tracing::{debug, warn};

use crate::models::{EducationEntry, ExperienceEntry};
use crate::template_engine::escape::escape_html;
use crate::template_engine::tokens::{fill_tokens, Substitution};

/// List styling for `{{exp_description}}` inside a loop block.
const LOOP_LIST_CLASS: &str = "list-disc pl-5 space-y-1 text-sm text-gray-600";
/// List styling for the bare-token fallback outside any loop block.
const BARE_LIST_CLASS: &str = "list-disc pl-5 space-y-1";

pub(crate) static EXPERIENCE: Lazy<BlockKind> =
    Lazy::new(|| BlockKind::new("experience", "EXPERIENCE", "{{exp_"));

pub(crate) static EDUCATION: Lazy<BlockKind> =
    Lazy::new(|| BlockKind::new("education", "EDUCATION", "{{edu_"));

/// Where an entry is being substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Inside the repeat unit of a marked block.
    Loop,
    /// Bare tokens found outside any block (first-entry fallback).
    Bare,
}

/// A collection item that can fill one instance of a repeat unit.
pub(crate) trait BlockItem {
    fn substitutions(&self, placement: Placement) -> Vec<Substitution>;
}

/// Compiled marker patterns for one entity kind.
pub(crate) struct BlockKind {
    label: &'static str,
    token_prefix: &'static str,
    /// One pattern per accepted spelling, in priority order.
    pairs: [Regex; 2],
    /// Start of either spelling closed by the end of either spelling.
    any_pair: Regex,
    /// Any single marker of either spelling.
    any_marker: Regex,
}

impl BlockKind {
    fn new(label: &'static str, entity: &str, token_prefix: &'static str) -> Self {
        let starts = [format!("START_{entity}_LOOP"), format!("{entity}_LOOP_START")];
        let ends = [format!("END_{entity}_LOOP"), format!("{entity}_LOOP_END")];

        Self {
            label,
            token_prefix,
            pairs: [
                pair_pattern(&starts[0], &ends[0]),
                pair_pattern(&starts[1], &ends[1]),
            ],
            any_pair: pair_pattern(
                &format!("(?:{}|{})", starts[0], starts[1]),
                &format!("(?:{}|{})", ends[0], ends[1]),
            ),
            any_marker: Regex::new(&format!(
                r"(?i)<!--\s*(?:{}|{}|{}|{})\s*-->",
                starts[0], starts[1], ends[0], ends[1]
            ))
            .expect("loop marker pattern is valid"),
        }
    }
}

fn pair_pattern(start: &str, end: &str) -> Regex {
    Regex::new(&format!(
        r"(?is)<!--\s*{start}\s*-->(.*?)<!--\s*{end}\s*-->"
    ))
    .expect("loop marker pattern is valid")
}

/// Expands the marked blocks of `kind` once per item, then applies the
/// first-entry fallback to any bare tokens of that kind left in the template.
///
/// The repeat unit comes from the first block of each spelling. Every block of
/// that spelling is replaced by the same expansion. An empty `items` slice
/// resolves each block to an empty string.
pub(crate) fn expand_blocks<T: BlockItem>(html: &str, kind: &BlockKind, items: &[T]) -> String {
    let mut html = html.to_string();

    for pattern in &kind.pairs {
        let Some(unit) = pattern.captures(&html).and_then(|caps| caps.get(1)) else {
            continue;
        };
        let expansion: String = items
            .iter()
            .map(|item| fill_tokens(unit.as_str(), &item.substitutions(Placement::Loop)))
            .collect();

        let blocks = pattern.find_iter(&html).count();
        debug!(
            "Expanded {} {} block(s) with {} entries",
            blocks,
            kind.label,
            items.len()
        );
        html = pattern.replace_all(&html, NoExpand(&expansion)).into_owned();
    }

    if let Some(first) = items.first() {
        if html.contains(kind.token_prefix) {
            debug!(
                "Bare {} tokens outside a loop block; filling from the first entry only",
                kind.label
            );
            html = fill_tokens(&html, &first.substitutions(Placement::Bare));
        }
    }

    html
}

/// Strips marker comments that still form a start/end pair for `kind`,
/// keeping the content between them. Orphan markers are left in place.
pub(crate) fn strip_leftover_markers(html: &str, kind: &BlockKind) -> String {
    let stripped = kind.any_pair.replace_all(html, "$1").into_owned();

    let orphans = kind.any_marker.find_iter(&stripped).count();
    if orphans > 0 {
        warn!(
            "Template has {} unpaired {} loop marker(s); leaving them untouched",
            orphans, kind.label
        );
    }

    stripped
}

fn description_list(lines: &[String], class: &str) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let items: String = lines
        .iter()
        .map(|line| format!("<li>{}</li>", escape_html(line)))
        .collect();
    format!(r#"<ul class="{class}">{items}</ul>"#)
}

impl BlockItem for ExperienceEntry {
    fn substitutions(&self, placement: Placement) -> Vec<Substitution> {
        let list_class = match placement {
            Placement::Loop => LOOP_LIST_CLASS,
            Placement::Bare => BARE_LIST_CLASS,
        };
        vec![
            ("exp_company", escape_html(&self.company)),
            ("exp_role", escape_html(&self.role)),
            ("exp_duration", escape_html(&self.duration)),
            ("exp_description", description_list(&self.description, list_class)),
        ]
    }
}

impl BlockItem for EducationEntry {
    fn substitutions(&self, _placement: Placement) -> Vec<Substitution> {
        vec![
            ("edu_school", escape_html(&self.school)),
            ("edu_degree", escape_html(&self.degree)),
            ("edu_year", escape_html(&self.year)),
        ]
    }
}
