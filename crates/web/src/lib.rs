use uuidkit_core::{Uuid, resolve_namespace};
use wasm_bindgen::prelude::*;

fn to_js(err: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Parse any accepted spelling and return the canonical form.
/// Throws the parse error message on failure.
#[wasm_bindgen]
pub fn parse(text: &str) -> Result<String, JsValue> {
    Uuid::parse_str(text).map(|u| u.to_string()).map_err(to_js)
}

/// Like `parse`, but requires a non-nil RFC 4122 UUID with a known version
#[wasm_bindgen]
pub fn parse_strict(text: &str) -> Result<String, JsValue> {
    Uuid::parse_strict(text).map(|u| u.to_string()).map_err(to_js)
}

/// Re-format UUID text: "canonical", "urn", "braced" or "compact"
#[wasm_bindgen]
pub fn format(text: &str, form: &str) -> Result<String, JsValue> {
    let uuid = Uuid::parse_str(text).map_err(to_js)?;
    match form {
        "canonical" => Ok(uuid.hyphenated().to_string()),
        "urn" => Ok(uuid.urn().to_string()),
        "braced" => Ok(uuid.braced().to_string()),
        "compact" => Ok(uuid.simple().to_string()),
        other => Err(JsValue::from_str(&format!("unknown format `{}`", other))),
    }
}

#[wasm_bindgen]
pub fn new_v4() -> Result<String, JsValue> {
    Uuid::try_new_v4().map(|u| u.to_string()).map_err(to_js)
}

/// SHA-1 name-based UUID; `ns` is dns/url/oid/x500 or UUID text
#[wasm_bindgen]
pub fn new_v5(ns: &str, name: &str) -> Result<String, JsValue> {
    let namespace = resolve_namespace(ns).map_err(to_js)?;
    Ok(Uuid::new_v5(&namespace, name).to_string())
}

#[wasm_bindgen]
pub struct Benchmark {
    performance: web_sys::Performance,
}

#[wasm_bindgen]
impl Benchmark {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Benchmark, JsValue> {
        let performance = web_sys::window()
            .and_then(|window| window.performance())
            .ok_or_else(|| JsValue::from_str("performance timer unavailable"))?;
        Ok(Self { performance })
    }

    /// Generate `count` random UUIDs; returns UUIDs per second
    #[wasm_bindgen]
    pub fn run(&self, count: u32) -> Result<f64, JsValue> {
        let start = self.performance.now();

        for _ in 0..count {
            let _ = Uuid::try_new_v4().map_err(to_js)?;
        }

        let elapsed_s = (self.performance.now() - start) / 1000.0;
        Ok((count as f64) / elapsed_s)
    }
}
