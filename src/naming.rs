//! Candidate filename parsing for the `<prefix>v<token>.<ext>` convention.
//!
//! Landing page exports are versioned by name: a fixed prefix, a literal `v`,
//! a free-form version token, and a fixed extension. Examples with the stock
//! prefix `landing-` and extension `html`:
//!
//! - `landing-v1.html` → token `"1"`
//! - `landing-v2.3-final.html` → token `"2.3-final"`
//! - `landing-v.html` → token `""` (empty tokens are accepted)
//! - `landing.html`, `notes.txt` → not candidates
//!
//! The token is display metadata only. Selection is driven by filesystem
//! modification time, never by comparing tokens — tokens are free-form
//! strings with no defined ordering, and a higher-numbered file can well be
//! older on disk than a lower-numbered one. That divergence is deliberate
//! and surfaced in the scan output rather than resolved here.

/// Result of parsing a candidate filename like `landing-v2.html`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCandidate {
    /// The version token between `<prefix>v` and `.<ext>`. May be empty.
    pub token: String,
}

/// Parse a filename against the candidate pattern `<prefix>v<token>.<ext>`.
///
/// Returns `None` when the name does not match. The extension comparison is
/// case-insensitive (`.HTML` exports are still candidates); the prefix match
/// is exact.
pub fn parse_candidate_name(
    filename: &str,
    prefix: &str,
    extension: &str,
) -> Option<ParsedCandidate> {
    let rest = filename.strip_prefix(prefix)?.strip_prefix('v')?;

    let dot = rest.rfind('.')?;
    let (token, ext) = rest.split_at(dot);
    let ext = &ext[1..];
    if !ext.eq_ignore_ascii_case(extension) {
        return None;
    }

    Some(ParsedCandidate {
        token: token.to_string(),
    })
}
