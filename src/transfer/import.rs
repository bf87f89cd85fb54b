//! Tolerant import of user-supplied JSON.
//!
//! Payloads come from hand-edited or foreign files, so field values are
//! judged by truthiness and coerced to text rather than decoded strictly.

use crate::models::{JobApplication, Status};
use crate::store::generate_id;
use serde_json::{Map, Value};

/// Cleaned records ready for `replace_all`, plus how many were filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatch {
    pub applications: Vec<JobApplication>,
    pub dropped: usize,
}

const REQUIRED: [&str; 4] = ["company", "title", "status", "date"];

/// Parse and clean an import payload.
///
/// Returns `None` when the text is not JSON or its top level is not an
/// array. Elements lacking a truthy `company`, `title`, `status` or `date`
/// are dropped; the rest are normalized.
pub fn parse_import(text: &str) -> Option<ImportBatch> {
    // files saved by some Windows editors start with a byte-order mark
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let items = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::debug!("import payload is not an array; ignoring");
            return None;
        }
        Err(e) => {
            tracing::debug!(error = %e, "import payload is not valid JSON; ignoring");
            return None;
        }
    };

    let total = items.len();
    let applications: Vec<JobApplication> = items.iter().filter_map(clean_record).collect();

    Some(ImportBatch {
        dropped: total - applications.len(),
        applications,
    })
}

fn clean_record(item: &Value) -> Option<JobApplication> {
    let obj = item.as_object()?;

    if !REQUIRED.iter().all(|k| field_truthy(obj, k)) {
        return None;
    }

    let id = match obj.get("id") {
        Some(v) if is_truthy(v) => coerce_string(v),
        _ => generate_id(),
    };

    let status = obj
        .get("status")
        .and_then(Value::as_str)
        .and_then(Status::from_name)
        .unwrap_or(Status::Applied);

    let notes = match obj.get("notes") {
        Some(v) if is_truthy(v) => coerce_string(v),
        _ => String::new(),
    };

    Some(JobApplication {
        id,
        company: coerce_string(&obj["company"]),
        title: coerce_string(&obj["title"]),
        status,
        date: coerce_string(&obj["date"]),
        notes,
    })
}

fn field_truthy(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).is_some_and(is_truthy)
}

/// JavaScript truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a JSON value, the way `String(value)` renders it.
fn coerce_string(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => js_number(n.as_f64().unwrap_or_default()),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|i| match i {
                Value::Null => String::new(),
                other => coerce_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// JavaScript `Number.prototype.toString()` for a finite double.
///
/// Shortest round-trip digits, plain notation for decimal exponents in
/// `-7 < e < 21`, scientific (`1e+21`, `1.5e-7`) outside that range.
fn js_number(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if f < 0.0 {
        return format!("-{}", js_number(-f));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7"
    let sci = format!("{f:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return f.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp + 1;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", (n - 1).abs())
        } else {
            format!("{first}.{rest}e{sign}{}", (n - 1).abs())
        }
    }
}
