//! Compiles config/triage_keywords.toml into `$OUT_DIR/keywords.rs`.
//!
//! The generated file holds plain `static` slices so the classifiers scan
//! fixed, ordered tables with no parsing at runtime.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "config/triage_keywords.toml";

const INCIDENT_LABELS: &[&str] = &["Medical", "Fire", "Accident", "Crime"];
const URGENCY_LABELS: &[&str] = &["CRITICAL", "HIGH", "MEDIUM", "LOW"];

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");
    println!("cargo:rerun-if-changed=build.rs");

    let raw = fs::read_to_string(CONFIG_PATH)
        .unwrap_or_else(|e| panic!("cannot read {CONFIG_PATH}: {e}"));
    let config: toml::Table = raw
        .parse()
        .unwrap_or_else(|e| panic!("{CONFIG_PATH} is not valid TOML: {e}"));

    let mut out = String::new();
    out.push_str("// @generated by build.rs from config/triage_keywords.toml\n\n");

    let fillers = word_list(&config, "filler_words");
    emit_word_list(&mut out, "FILLER_WORDS", &fillers);

    let locatives = word_list(&config, "locative_prepositions");
    emit_word_list(&mut out, "LOCATIVE_PREPOSITIONS", &locatives);

    let incident = keyword_sets(&config, "incident", INCIDENT_LABELS);
    emit_keyword_sets(&mut out, "INCIDENT_KEYWORDS", "IncidentType", &incident);

    let urgency = keyword_sets(&config, "urgency", URGENCY_LABELS);
    emit_keyword_sets(&mut out, "URGENCY_KEYWORDS", "UrgencyLevel", &urgency);

    let out_dir = env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR not set: {e}"));
    let dest = Path::new(&out_dir).join("keywords.rs");
    fs::write(&dest, out).unwrap_or_else(|e| panic!("cannot write {}: {e}", dest.display()));
}

fn word_list(config: &toml::Table, key: &str) -> Vec<String> {
    let values = config
        .get(key)
        .and_then(toml::Value::as_array)
        .unwrap_or_else(|| panic!("{CONFIG_PATH}: `{key}` must be an array of strings"));
    values
        .iter()
        .map(|v| {
            let word = v
                .as_str()
                .unwrap_or_else(|| panic!("{CONFIG_PATH}: `{key}` entries must be strings"));
            check_normalized(key, word);
            word.to_string()
        })
        .collect()
}

fn keyword_sets(config: &toml::Table, key: &str, allowed: &[&str]) -> Vec<(String, Vec<String>)> {
    let entries = config
        .get(key)
        .and_then(toml::Value::as_array)
        .unwrap_or_else(|| panic!("{CONFIG_PATH}: expected one or more [[{key}]] entries"));

    let mut sets = Vec::with_capacity(entries.len());
    for entry in entries {
        let table = entry
            .as_table()
            .unwrap_or_else(|| panic!("{CONFIG_PATH}: [[{key}]] entries must be tables"));
        let label = table
            .get("label")
            .and_then(toml::Value::as_str)
            .unwrap_or_else(|| panic!("{CONFIG_PATH}: [[{key}]] entry without a `label`"));
        if !allowed.contains(&label) {
            panic!("{CONFIG_PATH}: unknown {key} label `{label}`, expected one of {allowed:?}");
        }
        if sets.iter().any(|(l, _): &(String, Vec<String>)| l == label) {
            panic!("{CONFIG_PATH}: duplicate {key} label `{label}`");
        }
        let keywords = word_list(table, "keywords");
        sets.push((variant_name(label), keywords));
    }
    sets
}

/// Keywords are matched against normalized text, so they must already be
/// in normalized form.
fn check_normalized(key: &str, word: &str) {
    let ok = !word.is_empty()
        && !word.starts_with(' ')
        && !word.ends_with(' ')
        && !word.contains("  ")
        && word.chars().all(|c| c.is_ascii_lowercase() || c == ' ');
    if !ok {
        panic!("{CONFIG_PATH}: `{key}` entry {word:?} must be lowercase letters and single spaces");
    }
}

/// "CRITICAL" -> "Critical", "Medical" -> "Medical".
fn variant_name(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

fn emit_word_list(out: &mut String, name: &str, words: &[String]) {
    let _ = writeln!(out, "pub static {name}: &[&str] = &{words:?};\n");
}

fn emit_keyword_sets(out: &mut String, name: &str, ty: &str, sets: &[(String, Vec<String>)]) {
    let _ = writeln!(out, "pub static {name}: &[KeywordSet<{ty}>] = &[");
    for (variant, keywords) in sets {
        let _ = writeln!(
            out,
            "    KeywordSet {{ label: {ty}::{variant}, keywords: &{keywords:?} }},"
        );
    }
    let _ = writeln!(out, "];\n");
}
