//! Tab-separated dictionary input.
//!
//! `data.tsv` is a header-first dump with columns `tag`, `trans`, `jpTag`,
//! `count`, `tagGroup`. Cells can be very long, so no per-field size
//! ceiling is applied.

use serde::Deserialize;
use std::io::Read;
use tagdict_core::TagRecord;

/// Raw cells of one row, keyed by the header names. Rows shorter than the
/// header deserialize with the missing cells as empty strings.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    tag: String,

    #[serde(default)]
    trans: String,

    #[serde(default, rename = "jpTag")]
    jp_tag: String,

    #[serde(default)]
    count: String,

    #[serde(default, rename = "tagGroup")]
    tag_group: String,
}

/// Parse a count cell. Anything that is not a whole number coerces to 0:
/// junk counts keep their row, they do not reject it.
pub fn count_or_zero(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Read all tag records from tab-separated input, in file order.
pub fn read_tags<R: Read>(input: R) -> Result<Vec<TagRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut tags = Vec::new();
    for row in reader.deserialize() {
        let row: RawRow = row?;
        tags.push(TagRecord {
            tag: row.tag,
            translation: row.trans,
            japanese: row.jp_tag,
            count: count_or_zero(&row.count),
            group: Some(row.tag_group),
        });
    }
    Ok(tags)
}
