//! Bidirectional mapping between a filter set and a URL query string.
//!
//! Encoding is sparse so shared links stay short: fields with no
//! condition emit nothing and the default `qualified_only = true` is
//! implicit. Decoding keys each condition on the presence of its
//! `{field}_op` parameter; value parameters alone reconstruct nothing.

use std::collections::HashMap;

use url::form_urlencoded;

use crate::domain::StatField;
use crate::filters::condition::{Comparator, NumericCondition};
use crate::filters::set::RankingsFilters;

/// Encode a filter set as a query string, e.g.
/// `min_op=gte&min_val=1000&qualified=false`.
pub fn to_query_string(filters: &RankingsFilters) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());

    for field in StatField::ALL {
        let Some(cond) = filters.condition(field) else {
            continue;
        };
        ser.append_pair(&format!("{}_op", field.key()), cond.op.as_str());
        if let Some(v) = cond.value {
            ser.append_pair(&format!("{}_val", field.key()), &format_number(v));
        }
        if let Some(v) = cond.value2 {
            ser.append_pair(&format!("{}_val2", field.key()), &format_number(v));
        }
    }

    if !filters.qualified_only {
        ser.append_pair("qualified", "false");
    }

    ser.finish()
}

/// Decode a query string back into a filter set. Unknown parameters and
/// unknown operators are ignored; unparseable numbers are left absent.
/// The qualified flag is true unless the literal `"false"` is present.
pub fn from_query_string(query: &str) -> RankingsFilters {
    let query = query.strip_prefix('?').unwrap_or(query);
    let params: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    let mut filters = RankingsFilters::default();
    for field in StatField::ALL {
        let Some(op) = params
            .get(&format!("{}_op", field.key()))
            .and_then(|s| Comparator::from_key(s))
        else {
            continue;
        };
        let value = params
            .get(&format!("{}_val", field.key()))
            .and_then(|s| s.parse::<f64>().ok());
        let value2 = params
            .get(&format!("{}_val2", field.key()))
            .and_then(|s| s.parse::<f64>().ok());
        filters.set_condition(field, Some(NumericCondition { op, value, value2 }));
    }

    filters.qualified_only = params.get("qualified").map_or(true, |v| v != "false");
    filters
}

// f64 Display already renders the shortest round-trippable form
// (1000 -> "1000", 0.5 -> "0.5"), which matches what the links expect.
fn format_number(v: f64) -> String {
    format!("{}", v)
}
