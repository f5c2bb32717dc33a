use std::collections::{HashMap, HashSet};

use clap::ValueEnum;
use regex::Regex;
use serde_json::Value;

use crate::error::RemapError;

/// How the `old -> new` pairs are applied to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Replace each pair in turn on the already rewritten text. A later pair
    /// also rewrites what an earlier pair produced.
    Sequential,
    /// Replace all pairs in one scan of the untouched text, longest token first
    SinglePass,
    /// Parse the document as JSON and replace string values equal to a token
    Structured,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Replaced {
        old: String,
        new: String,
        count: usize,
    },
    NotFound {
        old: String,
    },
    Unchanged {
        old: String,
    },
    /// The same `old` token appeared earlier in the row, only that pairing applies
    Shadowed {
        old: String,
        new: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemapReport {
    pub outcomes: Vec<Outcome>,
    /// Future-row tokens past the end of the previous row
    pub unused: Vec<String>,
}

impl RemapReport {
    pub fn not_found(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::NotFound { old } => Some(old.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Substitute every token of `prev` with the token at the same position in `future`
pub fn remap(
    strategy: Strategy,
    text: &str,
    prev: &[String],
    future: &[String],
) -> Result<(String, RemapReport), RemapError> {
    let pairs: Vec<(&str, &str)> = prev
        .iter()
        .zip(future.iter())
        .map(|(old, new)| (old.as_str(), new.as_str()))
        .collect();

    let (text, outcomes) = match strategy {
        Strategy::Sequential => replace_sequential(text, &pairs),
        Strategy::SinglePass => replace_single_pass(text, &pairs)?,
        Strategy::Structured => replace_structured(text, &pairs)?,
    };

    let unused = future.iter().skip(prev.len()).cloned().collect();

    Ok((text, RemapReport { outcomes, unused }))
}

fn replace_sequential(text: &str, pairs: &[(&str, &str)]) -> (String, Vec<Outcome>) {
    let mut text = text.to_string();
    let mut outcomes = Vec::with_capacity(pairs.len());

    for &(old, new) in pairs {
        if old == new {
            outcomes.push(Outcome::Unchanged { old: old.into() });
            continue;
        }

        let count = if old.is_empty() {
            0
        } else {
            text.matches(old).count()
        };

        if count == 0 {
            outcomes.push(Outcome::NotFound { old: old.into() });
        } else {
            text = text.replace(old, new);
            outcomes.push(Outcome::Replaced {
                old: old.into(),
                new: new.into(),
                count,
            });
        }
    }

    (text, outcomes)
}

/// First pairing of every non-empty `old` token
fn lookup_table<'a>(pairs: &[(&'a str, &'a str)]) -> HashMap<&'a str, &'a str> {
    let mut table = HashMap::with_capacity(pairs.len());
    for &(old, new) in pairs.iter().filter(|(old, _)| !old.is_empty()) {
        table.entry(old).or_insert(new);
    }
    table
}

fn replace_single_pass(
    text: &str,
    pairs: &[(&str, &str)],
) -> Result<(String, Vec<Outcome>), RemapError> {
    let table = lookup_table(pairs);
    let mut counts: HashMap<String, usize> = HashMap::new();

    if table.is_empty() {
        return Ok((text.to_string(), outcomes(pairs, &counts)));
    }

    // Alternation is leftmost-first, so longer tokens are listed first
    let mut tokens: Vec<&str> = table.keys().copied().collect();
    tokens.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let pattern = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<String>>()
        .join("|");
    let matcher = Regex::new(&pattern)?;

    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for m in matcher.find_iter(text) {
        let token = m.as_str();
        result.push_str(&text[last..m.start()]);
        result.push_str(table.get(token).copied().unwrap_or(token));
        *counts.entry(token.to_string()).or_default() += 1;
        last = m.end();
    }
    result.push_str(&text[last..]);

    Ok((result, outcomes(pairs, &counts)))
}

fn replace_structured(
    text: &str,
    pairs: &[(&str, &str)],
) -> Result<(String, Vec<Outcome>), RemapError> {
    let table = lookup_table(pairs);
    let mut counts: HashMap<String, usize> = HashMap::new();

    let mut document: Value = serde_json::from_str(text)?;
    replace_values(&mut document, &table, &mut counts);

    Ok((serde_json::to_string_pretty(&document)?, outcomes(pairs, &counts)))
}

/// Rewrite string values in place; object keys are left alone
fn replace_values(value: &mut Value, table: &HashMap<&str, &str>, counts: &mut HashMap<String, usize>) {
    match value {
        Value::String(s) => {
            if let Some(&new) = table.get(s.as_str()) {
                *counts.entry(s.clone()).or_default() += 1;
                *s = new.to_string();
            }
        }
        Value::Array(items) => {
            for item in items {
                replace_values(item, table, counts);
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                replace_values(item, table, counts);
            }
        }
        _ => {}
    }
}

fn outcomes(pairs: &[(&str, &str)], counts: &HashMap<String, usize>) -> Vec<Outcome> {
    let mut seen = HashSet::new();

    pairs
        .iter()
        .map(|&(old, new)| {
            if !old.is_empty() && !seen.insert(old) {
                return Outcome::Shadowed {
                    old: old.into(),
                    new: new.into(),
                };
            }
            if old == new {
                return Outcome::Unchanged { old: old.into() };
            }

            match counts.get(old).copied().unwrap_or(0) {
                0 => Outcome::NotFound { old: old.into() },
                count => Outcome::Replaced {
                    old: old.into(),
                    new: new.into(),
                    count,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[rstest]
    #[case(Strategy::Sequential)]
    #[case(Strategy::SinglePass)]
    fn every_previous_color_is_swapped(#[case] strategy: Strategy) {
        let (text, report) = remap(
            strategy,
            "color: #fff and #000",
            &row(&["#fff", "#000"]),
            &row(&["#eee", "#111"]),
        )
        .unwrap();

        assert_eq!(text, "color: #eee and #111");
        assert!(report.not_found().is_empty());
        assert!(report.unused.is_empty());
    }

    #[rstest]
    #[case(Strategy::Sequential)]
    #[case(Strategy::SinglePass)]
    fn missing_tokens_are_reported_and_text_is_kept(#[case] strategy: Strategy) {
        let (text, report) = remap(
            strategy,
            "color: #fff",
            &row(&["#fff", "#abc"]),
            &row(&["#eee", "#def"]),
        )
        .unwrap();

        assert_eq!(text, "color: #eee");
        assert_eq!(report.not_found(), vec!["#abc"]);
    }

    #[test]
    fn sequential_replacement_chains_earlier_results() {
        let (text, report) = remap(
            Strategy::Sequential,
            "A B",
            &row(&["A", "B"]),
            &row(&["B", "C"]),
        )
        .unwrap();

        // A became B, then both Bs became C
        assert_eq!(text, "C C");
        assert_eq!(
            report.outcomes,
            vec![
                Outcome::Replaced { old: "A".into(), new: "B".into(), count: 1 },
                Outcome::Replaced { old: "B".into(), new: "C".into(), count: 2 },
            ]
        );
    }

    #[test]
    fn single_pass_replacement_does_not_chain() {
        let (text, _) = remap(
            Strategy::SinglePass,
            "A B",
            &row(&["A", "B"]),
            &row(&["B", "C"]),
        )
        .unwrap();

        assert_eq!(text, "B C");
    }

    #[test]
    fn single_pass_prefers_the_longest_token() {
        let (text, _) = remap(
            Strategy::SinglePass,
            "#aaa #aaaaaa",
            &row(&["#aaa", "#aaaaaa"]),
            &row(&["#bbb", "#cccccc"]),
        )
        .unwrap();

        assert_eq!(text, "#bbb #cccccc");
    }

    #[test]
    fn equal_tokens_are_reported_as_unchanged() {
        let (text, report) = remap(
            Strategy::Sequential,
            "#fff",
            &row(&["#fff"]),
            &row(&["#fff"]),
        )
        .unwrap();

        assert_eq!(text, "#fff");
        assert_eq!(report.outcomes, vec![Outcome::Unchanged { old: "#fff".into() }]);
    }

    #[test]
    fn extra_future_tokens_are_listed_but_not_applied() {
        let (text, report) = remap(
            Strategy::Sequential,
            "#fff #111",
            &row(&["#fff"]),
            &row(&["#eee", "#111", "#222"]),
        )
        .unwrap();

        assert_eq!(text, "#eee #111");
        assert_eq!(report.unused, row(&["#111", "#222"]));
    }

    #[test]
    fn longer_previous_row_stops_at_future_length() {
        let (text, report) = remap(
            Strategy::Sequential,
            "#fff #000",
            &row(&["#fff", "#000"]),
            &row(&["#eee"]),
        )
        .unwrap();

        assert_eq!(text, "#eee #000");
        assert_eq!(report.outcomes.len(), 1);
        assert!(report.unused.is_empty());
    }

    #[test]
    fn empty_tokens_are_never_applied() {
        let (text, report) = remap(Strategy::SinglePass, "ab", &row(&[""]), &row(&["x"])).unwrap();

        assert_eq!(text, "ab");
        assert_eq!(report.not_found(), vec![""]);
    }

    #[test]
    fn repeated_tokens_only_apply_their_first_pairing() {
        let (text, report) = remap(
            Strategy::SinglePass,
            "#fff",
            &row(&["#fff", "#fff"]),
            &row(&["#eee", "#ddd"]),
        )
        .unwrap();

        assert_eq!(text, "#eee");
        assert_eq!(
            report.outcomes[1],
            Outcome::Shadowed { old: "#fff".into(), new: "#ddd".into() }
        );
    }

    #[test]
    fn structured_replaces_whole_string_values_only() {
        let document = r##"{"name": "#fff", "color": "#fff", "#fff": "#fffa", "children": [{"color": "#000", "depth": 1}]}"##;
        let (text, report) = remap(
            Strategy::Structured,
            document,
            &row(&["#fff", "#000"]),
            &row(&["#eee", "#111"]),
        )
        .unwrap();

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "#eee");
        assert_eq!(value["color"], "#eee");
        assert_eq!(value["#fff"], "#fffa");
        assert_eq!(value["children"][0]["color"], "#111");
        assert_eq!(value["children"][0]["depth"], 1);
        assert_eq!(
            report.outcomes[0],
            Outcome::Replaced { old: "#fff".into(), new: "#eee".into(), count: 2 }
        );
    }

    #[test]
    fn structured_keeps_key_order() {
        let document = r##"{"name": "root", "color": "#fff", "children": []}"##;
        let (text, _) = remap(Strategy::Structured, document, &row(&["#fff"]), &row(&["#eee"])).unwrap();

        let name = text.find("\"name\"").unwrap();
        let color = text.find("\"color\"").unwrap();
        let children = text.find("\"children\"").unwrap();
        assert!(name < color && color < children);
    }

    #[test]
    fn structured_rejects_invalid_json() {
        let result = remap(Strategy::Structured, "color: #fff", &row(&["#fff"]), &row(&["#eee"]));
        assert!(matches!(result, Err(RemapError::Json(_))));
    }
}
