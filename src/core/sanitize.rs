// src/core/sanitize.rs

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "$1,000" / "DD: $1,000" / " 400 " → 1000 / 1000 / 400.
/// Anything left after dropping the marker, '$' and ',' must be digits.
pub fn parse_amount(s: &str) -> Option<u32> {
    let t = s.trim();
    let t = t.strip_prefix("DD:").unwrap_or(t).trim();
    let digits: String = t.chars().filter(|&c| c != '$' && c != ',').collect();
    let digits = digits.trim();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Digits right after `key` (e.g. `clue_id=` in `suggestcorrection.php?clue_id=123`).
pub fn number_after(s: &str, key: &str) -> Option<u64> {
    let idx = s.find(key)?;
    let digits: String = s[idx + key.len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Single-quoted string arguments of a JS call, escapes undone:
/// `toggle('a', 'b', 'it\'s')` → `["a", "b", "it's"]`.
pub fn js_string_args(call: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut cur = s!();
    let mut in_str = false;
    let mut chars = call.chars();

    while let Some(ch) = chars.next() {
        match (in_str, ch) {
            (false, '\'') => in_str = true,
            (false, _) => {}
            (true, '\\') => {
                if let Some(next) = chars.next() {
                    cur.push(next);
                }
            }
            (true, '\'') => {
                args.push(std::mem::take(&mut cur));
                in_str = false;
            }
            (true, c) => cur.push(c),
        }
    }
    args
}
