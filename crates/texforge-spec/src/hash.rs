//! Canonical hashing.
//!
//! Specs are hashed as `hex(BLAKE3(canonical_json))`, where the canonical
//! JSON form has sorted object keys and no insignificant whitespace, so two
//! specs that differ only in key order or formatting hash identically.

use crate::error::SpecError;
use crate::spec::TextureSpec;

/// Computes the canonical BLAKE3 hash of a whole spec.
///
/// # Example
/// ```
/// use texforge_spec::{FillSpec, Rgb, TextureSpec};
/// use texforge_spec::hash::canonical_spec_hash;
///
/// let spec = TextureSpec::builder("red-tile", FillSpec::solid(Rgb::RED)).build();
/// let hash = canonical_spec_hash(&spec).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_spec_hash(spec: &TextureSpec) -> Result<String, SpecError> {
    let value = spec.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the hash of only the pixel-determining fields: the effective
/// dimensions and the fill. Renaming or re-describing a spec leaves it
/// unchanged.
pub fn canonical_content_hash(spec: &TextureSpec) -> Result<String, SpecError> {
    let dims = spec.dimensions();
    let value = serde_json::json!({
        "size": [dims.width(), dims.height()],
        "fill": serde_json::to_value(&spec.fill)?,
    });
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Canonicalizes a JSON value: sorted keys, no whitespace, minimal escaping.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_number(n),
        serde_json::Value::String(s) => format_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| format!("{}:{}", format_string(k), canonicalize_json(v)))
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if !f.is_finite() => "null".to_string(),
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => format!("{}", f),
        None => "null".to_string(),
    }
}

fn format_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::fill::FillSpec;

    fn make_spec(name: &str) -> TextureSpec {
        TextureSpec::builder(name, FillSpec::outlined(Rgb::RED, Rgb::BLUE, 1))
            .size(3, 3)
            .build()
    }

    #[test]
    fn test_canonical_spec_hash_is_stable() {
        let spec = make_spec("outlined-01");
        let hash1 = canonical_spec_hash(&spec).unwrap();
        let hash2 = canonical_spec_hash(&spec).unwrap();
        assert_eq!(hash1, hash2, "hash should be stable across calls");
        assert_eq!(hash1.len(), 64, "hash should be 64 hex characters");
    }

    #[test]
    fn test_spec_hash_changes_with_name() {
        let a = canonical_spec_hash(&make_spec("outlined-01")).unwrap();
        let b = canonical_spec_hash(&make_spec("outlined-02")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_content_hash_ignores_name_and_clamping() {
        let a = make_spec("outlined-01");
        let mut b = make_spec("outlined-02");
        b.description = Some("same pixels".to_string());
        assert_eq!(
            canonical_content_hash(&a).unwrap(),
            canonical_content_hash(&b).unwrap()
        );

        let mut zero = make_spec("outlined-01");
        zero.size = [0, 0];
        let mut one = make_spec("outlined-01");
        one.size = [1, 1];
        assert_eq!(
            canonical_content_hash(&zero).unwrap(),
            canonical_content_hash(&one).unwrap()
        );
    }

    #[test]
    fn test_canonicalize_sorts_keys() {
        let value = serde_json::json!({ "b": 1, "a": [true, null, 0.5], "c": "x\ny" });
        assert_eq!(
            canonicalize_json(&value),
            r#"{"a":[true,null,0.5],"b":1,"c":"x\ny"}"#
        );
    }
}
