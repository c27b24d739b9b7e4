//! Locale-aware string ordering for scope names.
//!
//! Approximates the French collation used for the billing table:
//! letters compare by their base form first (`é` sorts with `e`), then
//! unaccented before accented, then lowercase before uppercase. Ties on all
//! three levels fall back to a plain comparison so the order is total.

use std::cmp::Ordering;

fn base_of(c: char) -> &'static str {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        _ => "",
    }
}

/// One collation element per base letter: (primary, accented, uppercase).
fn elements(s: &str) -> Vec<(char, bool, bool)> {
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars() {
        let upper = c.is_uppercase();
        for lower in c.to_lowercase() {
            let base = base_of(lower);
            if base.is_empty() {
                out.push((lower, false, upper));
            } else {
                out.extend(base.chars().map(|b| (b, true, upper)));
            }
        }
    }
    out
}

pub fn compare(a: &str, b: &str) -> Ordering {
    let ea = elements(a);
    let eb = elements(b);

    let primary = ea.iter().map(|e| e.0).cmp(eb.iter().map(|e| e.0));
    let secondary = || ea.iter().map(|e| e.1).cmp(eb.iter().map(|e| e.1));
    let tertiary = || ea.iter().map(|e| e.2).cmp(eb.iter().map(|e| e.2));

    primary
        .then_with(secondary)
        .then_with(tertiary)
        .then_with(|| a.cmp(b))
}
