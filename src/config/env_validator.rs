//! Environment variable parsing with typo hints
//!
//! An invalid value never aborts the run: it produces a warning naming the
//! variable, a "Did you mean" hint when one is close, and the list of valid
//! values. The setting then falls through to the next config layer.

use std::io::Write;

/// Parses one environment variable of a closed value set
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// `None` (after warning on `writer`) when `parser` rejects the value.
    pub fn parse<T, F, W>(&self, value: &str, parser: F, writer: &mut W) -> Option<T>
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return Some(parsed);
        }

        let hint = closest(value, self.valid_values)
            .map(|s| format!(". Did you mean '{}'?", s))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, value, hint
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        None
    }
}

/// Nearest candidate within two edits, excluding exact matches.
pub(crate) fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let input = input.to_lowercase();
    candidates
        .iter()
        .map(|c| (*c, levenshtein(&input, c)))
        .filter(|(_, dist)| (1..=2).contains(dist))
        .min_by_key(|(_, dist)| *dist)
        .map(|(c, _)| c)
}

/// Edit distance over bytes
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a == b {
        return 0;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Booleans accepted in environment variables
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];
