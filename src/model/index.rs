// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canonicalization of free-typed student index strings.
//!
//! Users type indexes in many shapes (`RN1923`, `RN 19/23`, `RN 23/19`,
//! `RN 23/2019`, `RN 2019/23`, with stray punctuation). Search needs one
//! canonical form: `PROGRAM + YY + SERIAL`, e.g. `RN1923`.

use std::sync::OnceLock;

use regex::Regex;
use smol_str::{format_smolstr, SmolStr};

static SERIAL_SLASH_YEAR4: OnceLock<Regex> = OnceLock::new();
static YEAR4_SLASH_SERIAL: OnceLock<Regex> = OnceLock::new();
static YEAR2_SLASH_SERIAL: OnceLock<Regex> = OnceLock::new();
static SERIAL_SLASH_YEAR2: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("index pattern is a valid literal"))
}

/// Maps a free-typed index string to its canonical `PROGRAM + YY + SERIAL`
/// form. Total: unrecognized input degrades to stripping every character
/// that is not a letter or digit, and the empty string maps to itself.
///
/// The slashed patterns are tested in a fixed priority order, four-digit
/// years first. `RN23/19` is genuinely ambiguous (either side could be the
/// year); the year-first reading wins purely by check order, kept as-is for
/// compatibility with established behavior.
pub fn canonical_index(input: &str) -> SmolStr {
    let mut s: String =
        input.chars().filter(|c| !c.is_whitespace()).map(|c| c.to_ascii_uppercase()).collect();
    // Punctuation other than the slash separator never carries meaning.
    s.retain(|c| c.is_ascii_alphanumeric() || c == '/');

    // SERIAL/YYYY
    if let Some(caps) = pattern(&SERIAL_SLASH_YEAR4, r"^([A-Z]+)(\d+)/(\d{4})$").captures(&s) {
        return format_smolstr!("{}{}{}", &caps[1], &caps[3][2..], &caps[2]);
    }
    // YYYY/SERIAL
    if let Some(caps) = pattern(&YEAR4_SLASH_SERIAL, r"^([A-Z]+)(\d{4})/(\d+)$").captures(&s) {
        return format_smolstr!("{}{}{}", &caps[1], &caps[2][2..], &caps[3]);
    }
    // YY/SERIAL
    if let Some(caps) = pattern(&YEAR2_SLASH_SERIAL, r"^([A-Z]+)(\d{2})/(\d+)$").captures(&s) {
        return format_smolstr!("{}{}{}", &caps[1], &caps[2], &caps[3]);
    }
    // SERIAL/YY
    if let Some(caps) = pattern(&SERIAL_SLASH_YEAR2, r"^([A-Z]+)(\d+)/(\d{2})$").captures(&s) {
        return format_smolstr!("{}{}{}", &caps[1], &caps[3], &caps[2]);
    }

    // Fallback: strip everything that is not a letter or digit, no reordering.
    s.retain(|c| c.is_ascii_alphanumeric());
    SmolStr::from(s)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::canonical_index;

    #[rstest]
    #[case("RN 19/23", "RN1923")]
    #[case("rn19/2023", "RN2319")]
    #[case("RN-19/23", "RN1923")]
    #[case("", "")]
    #[case("RN1923", "RN1923")]
    #[case("rn 23/2019", "RN1923")]
    #[case("RN 2019/23", "RN1923")]
    #[case("rn 2019/123", "RN19123")]
    #[case("si20/7", "SI207")]
    fn canonical_forms(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(canonical_index(input), expected);
    }

    /// Two two-digit groups are ambiguous; the year-first reading wins by
    /// check order.
    #[test]
    fn two_digit_ambiguity_resolves_year_first() {
        assert_eq!(canonical_index("RN23/19"), "RN2319");
    }

    #[rstest]
    #[case("19/23", "1923")]
    #[case("RN//19", "RN19")]
    #[case("??", "")]
    #[case("rn-19-23", "RN1923")]
    fn unrecognized_input_degrades_to_stripping(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(canonical_index(input), expected);
    }
}
