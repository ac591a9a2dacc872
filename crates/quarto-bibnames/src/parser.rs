//! Decomposition of author fields into name records.
//!
//! An author field is split on the standalone word `and`, and each segment is
//! read in one of two grammars:
//!
//! - comma form, `[particle] Family[, Suffix], Given`
//! - direct form, `Given [particle] Family [Suffix]`
//!
//! Particles are found by casing alone. In direct form a particle is the run
//! of consecutive lowercase-leading words starting at the first one, and the
//! family name is everything after it. In comma form every word before the
//! first comma up to the last lowercase-leading one is a particle, which lets
//! capitalized particles such as "Van der" through when the family name is
//! delimited by the comma.
//!
//! If any segment does not look like a name, the whole field is returned as
//! a single literal. Prose such as "... and other authors of the Nutshell
//! handbooks" would otherwise be chopped into nonsense names.

use crate::config::ParserConfig;
use crate::name::{NameRecord, PersonName};
use crate::tokenizer::{Token, is_bare_delimiter, is_brace_group, is_lowercase_word, tokenize};
use crate::vocabulary::{CONJUNCTION, ET_AL_MARKER};

/// Name parser with a fixed configuration.
///
/// Parsing is pure; a parser can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct NameParser {
    config: ParserConfig,
}

impl NameParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an author field into names, in source order.
    ///
    /// Empty or blank input yields no names. Any other input yields at least
    /// one record.
    pub fn parse(&self, input: &str) -> Vec<NameRecord> {
        let tokens = tokenize(input);
        if tokens.is_empty() {
            return Vec::new();
        }

        let segments = split_on_conjunction(input, &tokens);
        if segments.len() > self.config.max_names {
            tracing::debug!(
                names = segments.len(),
                max = self.config.max_names,
                "Too many names in field, keeping it as a literal"
            );
            return vec![NameRecord::literal(input)];
        }

        let last = segments.len() - 1;
        let mut names = Vec::with_capacity(segments.len());
        for (idx, segment) in segments.iter().enumerate() {
            let closes_list = idx > 0 && idx == last;
            match self.parse_segment(input, segment, closes_list) {
                Some(name) => names.push(name),
                None => {
                    tracing::debug!(
                        segment = idx,
                        input,
                        "Segment does not look like a name, keeping field as a literal"
                    );
                    return vec![NameRecord::literal(input)];
                }
            }
        }
        names
    }

    /// Parse one `and`-delimited segment. `None` means the segment is not a
    /// plausible name.
    fn parse_segment(
        &self,
        input: &str,
        tokens: &[Token],
        closes_list: bool,
    ) -> Option<NameRecord> {
        let words = word_tokens(tokens);
        if words.is_empty() || words.len() > self.config.max_name_tokens {
            return None;
        }
        // A lone brace or quote left over from unbalanced input.
        if words.iter().any(|t| is_bare_delimiter(t.text(input))) {
            return None;
        }

        if let [only] = tokens {
            let text = only.text(input);
            if closes_list && self.config.recognize_others && text == ET_AL_MARKER {
                return Some(NameRecord::literal(text));
            }
            if is_brace_group(text) {
                return Some(NameRecord::literal(&text[1..text.len() - 1]));
            }
        }

        let parts: Vec<&[Token]> = tokens.split(Token::is_comma).collect();
        let name = match parts.as_slice() {
            [whole] => self.direct_form(input, &word_tokens(whole), None)?,
            [left, right] => match self.single_suffix(input, right) {
                // "George Friedman, Jr."
                Some(suffix) => self.direct_form(input, &word_tokens(left), Some(suffix))?,
                None => comma_form(input, &word_tokens(left), &[], None, right)?,
            },
            [left, middle, right] => match self.single_suffix(input, middle) {
                Some(suffix) => comma_form(input, &word_tokens(left), &[], Some(suffix), right)?,
                // Not a suffix, so the middle part continues the family name.
                None => comma_form(input, &word_tokens(left), &word_tokens(middle), None, right)?,
            },
            _ => return None,
        };

        tracing::trace!(
            family = name.family(),
            given = ?name.given(),
            particle = ?name.non_dropping_particle(),
            suffix = ?name.suffix(),
            "Parsed name"
        );
        Some(NameRecord::Structured(name))
    }

    /// The text of `part` if it is exactly one suffix word.
    fn single_suffix<'a>(&self, input: &'a str, part: &[Token]) -> Option<&'a str> {
        match part {
            [word] if self.config.is_suffix(word.text(input)) => Some(word.text(input)),
            _ => None,
        }
    }

    /// `Given [particle] Family [Suffix]`.
    fn direct_form<'a>(
        &self,
        input: &'a str,
        words: &[&Token],
        suffix: Option<&'a str>,
    ) -> Option<PersonName> {
        let mut words = words;
        let mut suffix = suffix;
        if suffix.is_none() && words.len() >= 2 {
            let last = words[words.len() - 1].text(input);
            if self.config.is_suffix(last) {
                suffix = Some(last);
                words = &words[..words.len() - 1];
            }
        }

        let (family_word, leading) = words.split_last()?;
        if is_lowercase_word(family_word.text(input)) {
            return None;
        }

        let is_particle = |t: &&Token| is_lowercase_word(t.text(input));
        let (given, particle, family) = match leading.iter().position(is_particle) {
            Some(first) => {
                let run = leading[first..]
                    .iter()
                    .take_while(|t| is_lowercase_word(t.text(input)))
                    .count();
                let end = first + run;
                (&leading[..first], &leading[first..end], &words[end..])
            }
            None => (leading, &[][..], &words[leading.len()..]),
        };

        Some(build(input, span_text(input, given), particle, family, suffix))
    }
}

/// `[particle] Family[, Suffix], Given`. `left` is the text before the first
/// comma; `continuation` is a non-suffix middle part that extends the family
/// name. Particles are only looked for in `left`.
fn comma_form(
    input: &str,
    left: &[&Token],
    continuation: &[&Token],
    suffix: Option<&str>,
    given: &[Token],
) -> Option<PersonName> {
    if left.is_empty() {
        return None;
    }

    let given_words = word_tokens(given);
    let given = span_text(input, &given_words);

    let (particle, family_left) = match left
        .iter()
        .rposition(|t| is_lowercase_word(t.text(input)))
    {
        // A lowercase last word is still the family name ("hooks, bell").
        Some(last) if last == left.len() - 1 => left.split_at(last),
        Some(last) => left.split_at(last + 1),
        None => (&[][..], left),
    };
    let family: Vec<&Token> = family_left.iter().chain(continuation).copied().collect();

    Some(build(input, given, particle, &family, suffix))
}

fn build(
    input: &str,
    given: Option<&str>,
    particle: &[&Token],
    family: &[&Token],
    suffix: Option<&str>,
) -> PersonName {
    // Callers guarantee a non-empty family span.
    let family = span_text(input, family).unwrap_or_default();
    let mut name = PersonName::new(family);
    if let Some(given) = given {
        name = name.with_given(given);
    }
    if !particle.is_empty() {
        let particle: Vec<&str> = particle.iter().map(|t| t.text(input)).collect();
        name = name.with_non_dropping_particle(particle.join(" "));
    }
    if let Some(suffix) = suffix {
        name = name.with_suffix(suffix);
    }
    name
}

/// Source text from the first word through the last, keeping the original
/// spacing and punctuation in between.
fn span_text<'a>(input: &'a str, words: &[&Token]) -> Option<&'a str> {
    let first = words.first()?;
    let last = words.last()?;
    Some(&input[first.span.start..last.span.end])
}

fn word_tokens(tokens: &[Token]) -> Vec<&Token> {
    tokens.iter().filter(|t| !t.is_comma()).collect()
}

/// Split the token stream on the conjunction. Segments may be empty when the
/// field starts or ends with `and` or repeats it.
fn split_on_conjunction<'t>(input: &str, tokens: &'t [Token]) -> Vec<&'t [Token]> {
    tokens
        .split(|t| !t.is_comma() && t.text(input) == CONJUNCTION)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(input: &str) -> PersonName {
        let names = NameParser::default().parse(input);
        assert_eq!(names.len(), 1, "expected one name from {:?}: {:?}", input, names);
        names[0]
            .as_structured()
            .cloned()
            .unwrap_or_else(|| panic!("expected a structured name from {:?}", input))
    }

    #[test]
    fn test_split_keeps_empty_segments() {
        let input = "and Smith and and Jones";
        let tokens = tokenize(input);
        let segments = split_on_conjunction(input, &tokens);
        let lens: Vec<usize> = segments.iter().map(|s| s.len()).collect();
        assert_eq!(lens, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_direct_form_trailing_suffix() {
        let name = parse_one("Henry Ford III");
        assert_eq!(name.given(), Some("Henry"));
        assert_eq!(name.family(), "Ford");
        assert_eq!(name.suffix(), Some("III"));
    }

    #[test]
    fn test_suffix_alone_is_a_family_name() {
        let name = parse_one("Jr.");
        assert_eq!(name.family(), "Jr.");
        assert_eq!(name.suffix(), None);
    }

    #[test]
    fn test_direct_form_particle_is_consecutive_lowercase_run() {
        let name = parse_one("Jean de La Fontaine");
        assert_eq!(name.given(), Some("Jean"));
        assert_eq!(name.non_dropping_particle(), Some("de"));
        assert_eq!(name.family(), "La Fontaine");

        let name = parse_one("Maria de Souza e Silva");
        assert_eq!(name.given(), Some("Maria"));
        assert_eq!(name.non_dropping_particle(), Some("de"));
        assert_eq!(name.family(), "Souza e Silva");

        let name = parse_one("Vincent van der Voort");
        assert_eq!(name.non_dropping_particle(), Some("van der"));
        assert_eq!(name.family(), "Voort");
    }

    #[test]
    fn test_comma_form_all_lowercase_family() {
        let name = parse_one("hooks, bell");
        assert_eq!(name.family(), "hooks");
        assert_eq!(name.given(), Some("bell"));
        assert_eq!(name.non_dropping_particle(), None);
    }

    #[test]
    fn test_comma_form_non_suffix_middle_joins_family() {
        let name = parse_one("Garcia, Marquez, Gabriel");
        assert_eq!(name.family(), "Garcia, Marquez");
        assert_eq!(name.given(), Some("Gabriel"));
        assert_eq!(name.suffix(), None);
    }

    #[test]
    fn test_comma_form_particle_stays_before_first_comma() {
        let name = parse_one("de la Cruz, y Garcia, Ana");
        assert_eq!(name.non_dropping_particle(), Some("de la"));
        assert_eq!(name.family(), "Cruz, y Garcia");
        assert_eq!(name.full_family(), "de la Cruz, y Garcia");
        assert_eq!(name.given(), Some("Ana"));

        let name = parse_one("garcia, marquez, Gabriel");
        assert_eq!(name.non_dropping_particle(), None);
        assert_eq!(name.family(), "garcia, marquez");
        assert_eq!(name.given(), Some("Gabriel"));
    }

    #[test]
    fn test_comma_form_empty_given() {
        let name = parse_one("Thompson,");
        assert_eq!(name.family(), "Thompson");
        assert_eq!(name.given(), None);
    }

    #[test]
    fn test_given_keeps_source_spacing() {
        let name = parse_one("Ritchie,  Dennis   M.");
        assert_eq!(name.given(), Some("Dennis   M."));
    }

    #[test]
    fn test_lowercase_final_word_is_not_a_name() {
        let names = NameParser::default().parse("Ken thompson");
        assert_eq!(names, vec![NameRecord::literal("Ken thompson")]);
    }

    #[test]
    fn test_too_many_commas_is_not_a_name() {
        let names = NameParser::default().parse("a, b, c, d");
        assert_eq!(names, vec![NameRecord::literal("a, b, c, d")]);
    }

    #[test]
    fn test_lone_delimiter_is_not_a_name() {
        let parser = NameParser::default();
        assert_eq!(parser.parse("}"), vec![NameRecord::literal("}")]);
        assert_eq!(parser.parse("\""), vec![NameRecord::literal("\"")]);
        assert_eq!(
            parser.parse("Ken Thompson and }"),
            vec![NameRecord::literal("Ken Thompson and }")]
        );
    }

    #[test]
    fn test_empty_left_of_comma_is_not_a_name() {
        let names = NameParser::default().parse(", Ken");
        assert_eq!(names, vec![NameRecord::literal(", Ken")]);
    }
}
