//! Key-Value Overlay Provider
//!
//! Translates flat `APP_`-prefixed key-value pairs into nested configuration
//! data. Both the secrets file and the process-environment snapshot speak
//! this dialect, so they share one translation and therefore one precedence
//! and coercion story:
//!
//! - `APP_SERVER__PORT=9100`    -> `server.port = 9100`
//! - `APP_APP__DEBUG=true`      -> `app.debug = true`
//! - `APP_DATABASE__URL=...`    -> `database.url = "..."`
//!
//! Pairs without the prefix are ignored, as is the `APP_ENV` discriminator
//! itself. Values parse leniently into booleans and numbers, falling back to
//! strings; whether the typed value fits the target field is decided at
//! extraction time.

use figment::value::{Dict, Map, Value};
use figment::{Error, Metadata, Profile, Provider};
use tracing::debug;

use crate::constants::env;

/// A figment provider over an explicit snapshot of key-value pairs.
/// Later pairs win over earlier ones for the same key.
pub struct KvOverlay {
    name: String,
    pairs: Vec<(String, String)>,
}

impl KvOverlay {
    pub fn new(name: impl Into<String>, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            name: name.into(),
            pairs: pairs.into_iter().collect(),
        }
    }
}

impl Provider for KvOverlay {
    fn metadata(&self) -> Metadata {
        Metadata::named(self.name.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut root = Dict::new();

        for (key, raw) in &self.pairs {
            if key == env::DISCRIMINATOR {
                continue;
            }
            let Some(stripped) = key.strip_prefix(env::PREFIX) else {
                debug!("ignoring key without {} prefix: {}", env::PREFIX, key);
                continue;
            };

            let segments: Vec<String> = stripped
                .split(env::SEPARATOR)
                .map(|s| s.to_ascii_lowercase())
                .collect();
            if segments.iter().any(String::is_empty) {
                debug!("ignoring key with empty segment: {}", key);
                continue;
            }

            insert_nested(&mut root, &segments, parse_scalar(raw));
        }

        let mut data = Map::new();
        data.insert(Profile::Default, root);
        Ok(data)
    }
}

/// Parse a raw string into the most specific scalar it can represent.
fn parse_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        return Value::from(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::from(false);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        return Value::from(n);
    }
    Value::from(raw)
}

/// Insert `value` at the nested path given by `segments`, creating
/// intermediate dictionaries as needed. A scalar blocking the path is
/// replaced; the last write for a path wins.
fn insert_nested(dict: &mut Dict, segments: &[String], value: Value) {
    match segments {
        [] => {}
        [leaf] => {
            dict.insert(leaf.clone(), value);
        }
        [head, rest @ ..] => {
            let entry = dict
                .entry(head.clone())
                .or_insert_with(|| Value::from(Dict::new()));
            if !matches!(entry, Value::Dict(..)) {
                *entry = Value::from(Dict::new());
            }
            if let Value::Dict(_, inner) = entry {
                insert_nested(inner, rest, value);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
