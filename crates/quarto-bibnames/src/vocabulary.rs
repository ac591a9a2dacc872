//! Closed word lists consulted by the name parser.
//!
//! These are the only lexical tables the parser uses. Everything else
//! (particles in particular) is decided from token casing and position.

/// Generational and honorific suffixes recognized after a family name.
///
/// Matching is exact: `"Jr."` and `"Jr"` are both listed because
/// bibliography data uses both, but `"jr."` or `"JR."` are not suffixes.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "Jr.", "Jr", "Sr.", "Sr", "II", "III", "IV", "2nd", "3rd", "4th",
];

/// The word that separates names in an author list.
pub const CONJUNCTION: &str = "and";

/// BibTeX's spelling of "et al." when it closes an author list.
pub const ET_AL_MARKER: &str = "others";

/// Most word tokens a single name may contain before it is treated as prose.
pub const DEFAULT_MAX_NAME_TOKENS: usize = 12;

/// Most names an author field may split into before the whole field is kept
/// as a literal.
pub const DEFAULT_MAX_NAMES: usize = 200;

/// Check a word against the built-in suffix list.
pub fn is_default_suffix(word: &str) -> bool {
    DEFAULT_SUFFIXES.contains(&word)
}
