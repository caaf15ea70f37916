//! Shared test utilities and fixtures.

#![allow(dead_code)]

/// Reference reversal built by prepending, independent of the library's
/// buffer-and-reverse implementation. Quadratic, fine for test-sized input.
pub fn reverse_oracle(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        out.insert(0, c);
    }
    out
}

/// Mixed-script sample texts exercising multi-byte chars and diacritics.
pub fn sample_texts() -> Vec<&'static str> {
    vec![
        "hello",
        "café",
        "naïve",
        "résumé",
        "tōkyō",
        "harīṣh",
        "tummalachērla",
        "తెలుగు",
        "హరీష్",
        "a b c",
        "",
    ]
}
