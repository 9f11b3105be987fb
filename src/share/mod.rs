//! Share-link codec: the list state as a compact `;`-delimited string of
//! `id|note|qty|price|checked` records, percent-encoded for embedding as a
//! `list` query parameter.
//!
//! Individual fields are additionally percent-escaped for `%`, `|` and `;`
//! so item names containing the record delimiters survive the round trip;
//! records without reserved characters stay byte-identical to links
//! produced by older encoders.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

use crate::{
    catalog::{self, CUSTOM_CATEGORY},
    errors::{GroceryError, Result},
    list::{GroceryList, LineItem},
};

/// Query parameter carrying the encoded list.
pub const SHARE_PARAM: &str = "list";

const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const FIELD_SET: &AsciiSet = &CONTROLS.add(b'%').add(b'|').add(b';');

fn escape_field(field: &str) -> String {
    utf8_percent_encode(field, FIELD_SET).to_string()
}

fn unescape_field(field: &str) -> String {
    percent_decode_str(field).decode_utf8_lossy().into_owned()
}

/// Encodes the list in canonical category order, ready to embed in a URL.
pub fn encode(list: &GroceryList) -> String {
    let records: Vec<String> = list
        .ordered_items()
        .map(|(_, item)| {
            let id = if item.is_custom() {
                // Custom items have no stable code; ship the display name.
                item.name.as_str()
            } else {
                item.id.as_str()
            };
            let note = if item.note.is_empty() {
                " "
            } else {
                item.note.as_str()
            };
            let price = if item.price.is_empty() {
                "0"
            } else {
                item.price.as_str()
            };
            let checked = if item.checked { "1" } else { "0" };
            format!(
                "{}|{}|{}|{}|{}",
                escape_field(id),
                escape_field(note),
                item.qty,
                escape_field(price),
                checked
            )
        })
        .collect();
    utf8_percent_encode(&records.join(";"), QUERY_SET).to_string()
}

/// Decodes a share string back into list state.
///
/// Records with fewer than five fields are skipped; quantity falls back to
/// 1, an all-whitespace note becomes empty, and the literal price `0` maps
/// back to unset. Ids are resolved against the catalog; unknown ids become
/// `Custom` items named by the decoded text. A malformed outer encoding
/// fails the whole import so callers can fall back to persisted state.
pub fn decode(encoded: &str) -> Result<GroceryList> {
    let decoded = percent_decode_str(encoded)
        .decode_utf8()
        .map_err(|err| GroceryError::Share(err.to_string()))?;

    let mut list = GroceryList::new();
    for record in decoded.split(';') {
        let fields: Vec<&str> = record.split('|').collect();
        if fields.len() < 5 {
            tracing::debug!(record, "skipping short share record");
            continue;
        }
        let id_field = unescape_field(fields[0]);
        let note_field = unescape_field(fields[1]);
        let qty = LineItem::coerce_qty(fields[2]);
        let price_field = unescape_field(fields[3]);
        let checked = fields[4] == "1";

        let (category, mut item) = match catalog::resolve(&id_field) {
            Some((category, name)) => (category, LineItem::new(id_field.clone(), name)),
            None => (CUSTOM_CATEGORY, LineItem::custom(id_field.clone())),
        };
        item.checked = checked;
        item.qty = qty;
        item.note = if note_field.trim().is_empty() {
            String::new()
        } else {
            note_field
        };
        item.price = if price_field == "0" {
            String::new()
        } else {
            price_field
        };
        list.add_item(category, item);
    }
    Ok(list)
}

/// Full shareable URL for the given base page. A base that already carries
/// a query string gets the list appended as a further parameter.
pub fn share_url(base: &str, list: &GroceryList) -> String {
    let joiner = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", base, joiner, SHARE_PARAM, encode(list))
}

/// Pulls the raw encoded `list` value out of a URL or bare query string.
pub fn extract_param(input: &str) -> Option<&str> {
    let query = match input.find('?') {
        Some(pos) => &input[pos + 1..],
        None => input,
    };
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(&format!("{}=", SHARE_PARAM)))
}
