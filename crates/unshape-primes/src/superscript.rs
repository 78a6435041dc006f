//! Superscript numerals for exponents.

/// Superscript glyphs indexed by decimal digit.
pub const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Maps a single character to its superscript form.
///
/// Decimal digits become superscript glyphs; anything else passes through.
pub fn superscript_char(c: char) -> char {
    match c.to_digit(10) {
        Some(d) => SUPERSCRIPT_DIGITS[d as usize],
        None => c,
    }
}

/// Renders a number in superscript, one glyph per decimal digit.
///
/// ```
/// use unshape_primes::to_superscript;
///
/// assert_eq!(to_superscript(3), "³");
/// assert_eq!(to_superscript(12), "¹²");
/// ```
pub fn to_superscript(n: impl std::fmt::Display) -> String {
    n.to_string().chars().map(superscript_char).collect()
}
