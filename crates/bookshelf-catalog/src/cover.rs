//! Placeholder cover synthesis.
//!
//! Records that arrive without a usable cover reference get a deterministic
//! SVG data URI derived from their title. The same title always yields the
//! same cover, so backfilled covers are stable across reloads.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const SHORT_TITLE_CHARS: usize = 16;
const FALLBACK_TITLE: &str = "未知";

const PALETTE: [&str; 6] = ["1e88e5", "8e24aa", "e53935", "fb8c00", "00897b", "3949ab"];

// encodeURIComponent leaves these unescaped.
const DATA_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Derive a placeholder cover image reference from a title.
pub fn resolve(title: &str) -> String {
    let trimmed = title.trim();
    let source = if trimmed.is_empty() {
        FALLBACK_TITLE
    } else {
        trimmed
    };
    let short: String = source.chars().take(SHORT_TITLE_CHARS).collect();
    let bg = PALETTE[short.chars().count() % PALETTE.len()];

    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 560">
  <defs>
    <linearGradient id="g" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="#{bg}" stop-opacity="0.9"/>
      <stop offset="100%" stop-color="#0a0f1f" stop-opacity="1"/>
    </linearGradient>
  </defs>
  <rect width="100%" height="100%" rx="24" fill="url(#g)"/>
  <g fill="white" fill-opacity="0.1">
    <circle cx="60" cy="80" r="50"/>
    <circle cx="360" cy="520" r="40"/>
    <rect x="280" y="40" width="80" height="20" rx="10"/>
    <rect x="40" y="480" width="120" height="18" rx="9"/>
  </g>
  <text x="28" y="300" font-family="system-ui, sans-serif" font-size="36" fill="white">{short}</text>
  <text x="28" y="340" font-family="system-ui, sans-serif" font-size="18" fill="white" fill-opacity="0.7">BookStore</text>
</svg>"##
    );

    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        utf8_percent_encode(&svg, DATA_URI)
    )
}
