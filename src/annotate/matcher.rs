//! Pattern matcher: find roleplay conventions in visible text.
//!
//! All positions are **character** (not byte) indices into the text.

/// The kind of a matched span.
///
/// `Bold` and `Italic` occur only as sub-matches inside quote interiors;
/// the top-level scan never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Done,
    Continued,
    Quote,
    Ooc,
    Action,
    Bold,
    Italic,
}

/// A claimed span of visible text. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub kind: MatchKind,
}

// ─── Scanning ────────────────────────────────────────────────────────────────

/// Scan left to right, greedily claiming non-overlapping spans.
///
/// At each position the candidates are tried in fixed priority order:
/// done marker, continued marker, quote, OOC aside, action. The first
/// success wins and the cursor jumps past it; on failure the cursor
/// advances by one and that character stays plain text.
pub fn find_matches(text: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut i = 0;

    while i < text.len() {
        if let Some((end, kind)) = match_progress_marker(text, i) {
            matches.push(Match { start: i, end, kind });
            i = end;
            continue;
        }

        let claimed = match text[i] {
            '"' => find_closing_quote(text, i + 1).map(|q| (q + 1, MatchKind::Quote)),
            '(' | '[' => find_ooc_end(text, i).map(|e| (e + 1, MatchKind::Ooc)),
            '*' => find_closing_star(text, i + 1).map(|e| (e + 1, MatchKind::Action)),
            _ => None,
        };

        match claimed {
            Some((end, kind)) => {
                matches.push(Match { start: i, end, kind });
                i = end;
            }
            None => i += 1,
        }
    }

    matches
}

// ─── Progress markers ────────────────────────────────────────────────────────

/// Match `(d)`, `(c)` or `(X/Y)` starting exactly at `start`.
///
/// `(d)` and `(N/N)` with numerically equal components classify as done;
/// `(c)` and any other `(X/Y)` as continued. Done takes priority, so an
/// equal pair is never reported as continued.
fn match_progress_marker(text: &[char], start: usize) -> Option<(usize, MatchKind)> {
    if text.get(start) != Some(&'(') {
        return None;
    }
    match text.get(start + 1) {
        Some(&'d') if text.get(start + 2) == Some(&')') => Some((start + 3, MatchKind::Done)),
        Some(&'c') if text.get(start + 2) == Some(&')') => Some((start + 3, MatchKind::Continued)),
        Some(c) if c.is_ascii_digit() => {
            let mut i = start + 1;
            while text.get(i).is_some_and(char::is_ascii_digit) {
                i += 1;
            }
            if text.get(i) != Some(&'/') {
                return None;
            }
            let slash = i;
            i += 1;
            let second = i;
            while text.get(i).is_some_and(char::is_ascii_digit) {
                i += 1;
            }
            if i == second || text.get(i) != Some(&')') {
                return None;
            }
            let kind = if digits_equal(&text[start + 1..slash], &text[second..i]) {
                MatchKind::Done
            } else {
                MatchKind::Continued
            };
            Some((i + 1, kind))
        }
        _ => None,
    }
}

/// Numeric equality of two non-empty decimal digit runs.
fn digits_equal(a: &[char], b: &[char]) -> bool {
    strip_leading_zeros(a) == strip_leading_zeros(b)
}

fn strip_leading_zeros(digits: &[char]) -> &[char] {
    let first = digits
        .iter()
        .position(|&c| c != '0')
        .unwrap_or(digits.len() - 1);
    &digits[first..]
}

// ─── Closer searches ─────────────────────────────────────────────────────────

/// Next `"` at or after `start`. No escaping, no nesting.
fn find_closing_quote(text: &[char], start: usize) -> Option<usize> {
    (start..text.len()).find(|&i| text[i] == '"')
}

/// End of an OOC aside opened at `start` with `(` or `[`.
///
/// A doubled opener (`((` / `[[`) requires the doubled closer; the return
/// value is the index of the last closing character. First occurrence
/// forward wins, with no nested-bracket awareness.
fn find_ooc_end(text: &[char], start: usize) -> Option<usize> {
    let close = match text[start] {
        '(' => ')',
        '[' => ']',
        _ => return None,
    };
    if text.get(start + 1) == Some(&text[start]) {
        (start + 2..text.len().saturating_sub(1))
            .find(|&i| text[i] == close && text[i + 1] == close)
            .map(|i| i + 1)
    } else {
        (start + 1..text.len()).find(|&i| text[i] == close)
    }
}

/// Closing `*` of an action span whose interior begins at `start`.
///
/// Whitespace right after the opener, or an immediately adjacent `*`
/// (empty emphasis), is not a match.
fn find_closing_star(text: &[char], start: usize) -> Option<usize> {
    match text.get(start) {
        Some(&c) if !c.is_whitespace() && c != '*' => {
            (start + 1..text.len()).find(|&i| text[i] == '*')
        }
        _ => None,
    }
}

/// Closing delimiter of an emphasis span inside a quote interior.
///
/// The interior begins at `start` and may not reach past `max_end`. The
/// first character must be non-whitespace, and the closer only counts when
/// the character before it is non-whitespace.
pub(crate) fn find_emphasis_end(
    text: &[char],
    start: usize,
    max_end: usize,
    delim: char,
) -> Option<usize> {
    if start >= max_end || text[start].is_whitespace() {
        return None;
    }
    (start + 1..max_end).find(|&i| text[i] == delim && !text[i - 1].is_whitespace())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
