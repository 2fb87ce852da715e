use super::ProductAttributes;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Main extraction entry point: ordered regex rule tables, first match wins.
pub fn extract(raw_name: &str) -> ProductAttributes {
    let grind = extract_grind(raw_name);
    let size = extract_size(raw_name);

    let canonical_name = canonical_name(
        raw_name,
        grind.as_ref().map(|g| g.phrase.as_str()),
        size.as_ref().and_then(|s| s.phrase.as_deref()),
    );

    ProductAttributes {
        canonical_name,
        grind_type: grind.map(|g| g.label).unwrap_or_default(),
        package_size: size.map(|s| s.label).unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Grind type
// ---------------------------------------------------------------------------

static GRIND_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(Whole Bean Coffee|Ground Coffee|Fine Ground Coffee)").expect("grind regex")
});

static COFFEE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bCoffee\b").expect("coffee regex"));

/// Raw grind token → canonical label. Tokens not listed are kept verbatim.
const GRIND_RENAMES: &[(&str, &str)] = &[
    ("Fine Ground", "Espresso Grind"),
    ("Ground", "Medium Grind"),
];

#[derive(Debug, PartialEq)]
struct GrindMatch {
    /// Text as it appeared in the product name, e.g. "Whole Bean Coffee".
    phrase: String,
    label: String,
}

fn extract_grind(text: &str) -> Option<GrindMatch> {
    let phrase = GRIND_PHRASE.find(text)?.as_str();
    let token = COFFEE_WORD.replacen(phrase, 1, "").trim().to_string();

    let label = GRIND_RENAMES
        .iter()
        .find(|(from, _)| token.eq_ignore_ascii_case(from))
        .map(|(_, to)| to.to_string())
        .unwrap_or(token);

    Some(GrindMatch {
        phrase: phrase.to_string(),
        label,
    })
}

// ---------------------------------------------------------------------------
// Package size
// ---------------------------------------------------------------------------

struct SizeRule {
    pattern: Regex,
    render: fn(&Captures) -> String,
    /// Weight phrases are stripped from the canonical name by this rule;
    /// pack phrases have their own removal pass.
    strips_phrase: bool,
}

impl SizeRule {
    fn new(pattern: &str, render: fn(&Captures) -> String, strips_phrase: bool) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("size regex"),
            render,
            strips_phrase,
        }
    }
}

static SIZE_RULES: Lazy<Vec<SizeRule>> = Lazy::new(|| {
    vec![
        // "12 oz Bag", "12oz Bag", "10.5 oz", ".5 oz", "8 oz Box"
        SizeRule::new(
            r"(?i)(\d*\.?\d+)\s*oz\b(?:\s*(?:Bag|Box)\b)?",
            |c| format!("{} oz", &c[1]),
            true,
        ),
        // "2 lb Bag", "5lb", "0.5 lb"
        SizeRule::new(
            r"(?i)(\d*\.?\d+)\s*lb\b(?:\s*(?:Bag|Box)\b)?",
            |c| format!("{} lb", &c[1]),
            true,
        ),
        // "Pack of 4"
        SizeRule::new(r"(?i)\bPack\s+of\s+(\d+)\b", |c| format!("{}-Pack", &c[1]), false),
        // "(6 Pack)"
        SizeRule::new(r"(?i)\(\s*(\d+)\s*Pack\s*\)", |c| format!("{}-Pack", &c[1]), false),
        // "3 Pack Box"
        SizeRule::new(r"(?i)\b(\d+)\s+Pack\s+Box\b", |c| format!("{}-Pack", &c[1]), false),
        // Last resort: unit glued to a following word, e.g. "12ozs", "1LBS"
        SizeRule::new(
            r"(?i)(\d*\.?\d+)\s*(oz|lb)",
            |c| format!("{} {}", &c[1], c[2].to_lowercase()),
            true,
        ),
    ]
});

#[derive(Debug, PartialEq)]
struct SizeMatch {
    label: String,
    /// Set when the matched text should be cut out of the canonical name.
    phrase: Option<String>,
}

fn extract_size(text: &str) -> Option<SizeMatch> {
    SIZE_RULES.iter().find_map(|rule| {
        let caps = rule.pattern.captures(text)?;
        Some(SizeMatch {
            label: (rule.render)(&caps),
            phrase: rule.strips_phrase.then(|| caps[0].to_string()),
        })
    })
}

// ---------------------------------------------------------------------------
// Canonical name
// ---------------------------------------------------------------------------

static PACK_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bPack\s+of\s+\d+\b|\(\s*\d+\s*Pack\s*\)|\b\d+\s+Pack\s+Box\b")
        .expect("pack regex")
});

const UNKNOWN_NAME: &str = "Unknown";

fn canonical_name(raw_name: &str, grind_phrase: Option<&str>, size_phrase: Option<&str>) -> String {
    let mut cleaned = raw_name.to_string();
    if let Some(phrase) = grind_phrase {
        cleaned = cleaned.replacen(phrase, "", 1);
    }
    if let Some(phrase) = size_phrase {
        cleaned = cleaned.replacen(phrase, "", 1);
    }
    cleaned = PACK_PHRASE.replace(&cleaned, "").into_owned();
    cleaned = COFFEE_WORD.replace(&cleaned, "").into_owned();

    let cleaned = cleaned
        .trim_end_matches(|c: char| c == ',' || c.is_whitespace())
        .trim();

    // "Vendor Co, Product, ...": the vendor prefix is dropped, only the
    // second segment is kept.
    let segments: Vec<&str> = cleaned.split(',').collect();
    let picked = match segments.as_slice() {
        [_, second, ..] => second.trim(),
        [only] => only.trim(),
        [] => "",
    };

    if picked.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        picked.to_string()
    }
}
