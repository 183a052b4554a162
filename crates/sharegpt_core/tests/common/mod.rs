#![allow(dead_code)]

use std::sync::Once;

use serde_json::{json, Value};
use sharegpt_core::{ConversionFailure, Converter, Denylist, Normalizer, RecordFilter};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

/// Returns its input unchanged, so tests see only stripping and repair.
pub struct PassThrough;

impl Converter for PassThrough {
    fn to_markdown(&self, html: &str) -> Result<String, ConversionFailure> {
        Ok(html.to_string())
    }
}

/// Fails with `failure` whenever the input contains `trigger`.
pub struct FailOn {
    pub trigger: &'static str,
    pub failure: ConversionFailure,
}

impl Converter for FailOn {
    fn to_markdown(&self, html: &str) -> Result<String, ConversionFailure> {
        if html.contains(self.trigger) {
            Err(self.failure)
        } else {
            Ok(html.to_string())
        }
    }
}

pub fn filter_with<C: Converter>(converter: C) -> RecordFilter<C> {
    RecordFilter::new(Normalizer::new(converter).unwrap(), Denylist::default())
}

pub fn page(id: &str, turns: &[&str]) -> Value {
    let items: Vec<Value> = turns
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let from = if i % 2 == 0 { "human" } else { "gpt" };
            json!({ "from": from, "value": text })
        })
        .collect();
    json!({ "pageProps": { "id": id, "content": { "items": items } } })
}
