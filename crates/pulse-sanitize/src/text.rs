//! String sanitization.

/// Maximum retained length in characters.
const MAX_LEN: usize = 1000;

/// The removed URI scheme (matched case-insensitively).
const SCHEME: &str = "javascript:";

/// Sanitize a single string for display.
///
/// Removes `<` and `>`, any `javascript:` scheme occurrence, and inline
/// event-handler patterns (`on<word>=`, optional whitespace before `=`),
/// all case-insensitively. The result is trimmed and truncated to 1000
/// characters.
///
/// The removal passes run to a fixed point: stripping one pattern can
/// splice another together (`javascrjavascript:ipt:` still contains the
/// scheme after one removal pass), so a single pass is not enough to
/// guarantee idempotence.
pub fn sanitize_text(input: &str) -> String {
    let mut cleaned = input.to_string();
    loop {
        let next = remove_event_handlers(&remove_scheme(&strip_angle_brackets(&cleaned)));
        if next == cleaned {
            break;
        }
        cleaned = next;
    }

    let trimmed = cleaned.trim();
    if trimmed.chars().count() <= MAX_LEN {
        return trimmed.to_string();
    }

    // Truncation can expose trailing whitespace; trim again so a second
    // pass cannot shrink the result further.
    let truncated: String = trimmed.chars().take(MAX_LEN).collect();
    truncated.trim_end().to_string()
}

fn strip_angle_brackets(s: &str) -> String {
    s.chars().filter(|c| *c != '<' && *c != '>').collect()
}

/// Remove every case-insensitive occurrence of the `javascript:` scheme.
fn remove_scheme(s: &str) -> String {
    // ASCII lowercasing preserves byte offsets, so the lowered shadow can
    // drive matching against the original text.
    let lower = s.to_ascii_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < s.len() {
        if lower[i..].starts_with(SCHEME) {
            i += SCHEME.len();
            continue;
        }
        match s[i..].chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }
    out
}

/// Remove inline event-handler attribute patterns: `on`, one or more word
/// characters, optional whitespace, `=`.
fn remove_event_handlers(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < s.len() {
        if i + 1 < bytes.len() && bytes[i] == b'o' && bytes[i + 1] == b'n' {
            let mut j = i + 2;
            while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'_') {
                j += 1;
            }
            if j > i + 2 {
                let mut k = j;
                while let Some(ch) = lower[k..].chars().next() {
                    if !ch.is_whitespace() {
                        break;
                    }
                    k += ch.len_utf8();
                }
                if k < bytes.len() && bytes[k] == b'=' {
                    // Skip the whole attribute pattern including '='.
                    i = k + 1;
                    continue;
                }
            }
        }
        match s[i..].chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }
    out
}
