//! Name records produced by the parser.
//!
//! A record is either a decomposed personal name or a literal kept verbatim.
//! Both serialize to CSL-JSON name objects, so the output can be dropped
//! straight into a reference's `author` or `editor` array.

use serde::{Deserialize, Serialize};

/// One name from an author or editor field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameRecord {
    /// A name decomposed into family, given, particles and suffix.
    Structured(PersonName),
    /// Text that could not be decomposed with confidence.
    Literal(LiteralName),
}

/// A personal name broken into its CSL components.
///
/// `family` is always non-empty. Records are built by the parser and not
/// modified afterwards, so the fields are only exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    family: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    given: Option<String>,

    /// Particle dropped when the name is inverted ("de" in "Ludwig de Beethoven"
    /// under some styles). The parser never fills this in; it exists so that
    /// records round-trip through CSL-JSON unchanged.
    #[serde(rename = "dropping-particle", skip_serializing_if = "Option::is_none")]
    dropping_particle: Option<String>,

    #[serde(rename = "non-dropping-particle", skip_serializing_if = "Option::is_none")]
    non_dropping_particle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
}

/// A name kept exactly as it appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiteralName {
    literal: String,
}

impl NameRecord {
    pub fn literal(text: impl Into<String>) -> Self {
        LiteralName::new(text).into()
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, NameRecord::Literal(_))
    }

    pub fn as_structured(&self) -> Option<&PersonName> {
        match self {
            NameRecord::Structured(name) => Some(name),
            NameRecord::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            NameRecord::Literal(lit) => Some(lit.text()),
            NameRecord::Structured(_) => None,
        }
    }

    /// The name in reading order, e.g. "Vincent van der Voort Jr.".
    pub fn display_name(&self) -> String {
        match self {
            NameRecord::Structured(name) => name.display_name(),
            NameRecord::Literal(lit) => lit.text().to_string(),
        }
    }

    /// The name in inverted order, e.g. "van der Voort, Vincent".
    pub fn sort_name(&self) -> String {
        match self {
            NameRecord::Structured(name) => name.sort_name(),
            NameRecord::Literal(lit) => lit.text().to_string(),
        }
    }

    /// The name in BibTeX's "von Last, Jr, First" form.
    ///
    /// Literals are wrapped in braces so the conjunction and commas inside
    /// them stay protected. Parsing the result again yields an equal record
    /// unless a literal has unbalanced braces or the family name contains a
    /// lowercase-leading word after a particle ("de Souza e Silva").
    pub fn to_bibtex(&self) -> String {
        match self {
            NameRecord::Structured(name) => name.to_bibtex(),
            NameRecord::Literal(lit) => format!("{{{}}}", lit.text()),
        }
    }
}

impl From<PersonName> for NameRecord {
    fn from(name: PersonName) -> Self {
        NameRecord::Structured(name)
    }
}

impl From<LiteralName> for NameRecord {
    fn from(lit: LiteralName) -> Self {
        NameRecord::Literal(lit)
    }
}

impl PersonName {
    /// Start a name from its family component.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: None,
            dropping_particle: None,
            non_dropping_particle: None,
            suffix: None,
        }
    }

    pub fn with_given(mut self, given: impl Into<String>) -> Self {
        self.given = Some(given.into());
        self
    }

    pub fn with_dropping_particle(mut self, particle: impl Into<String>) -> Self {
        self.dropping_particle = Some(particle.into());
        self
    }

    pub fn with_non_dropping_particle(mut self, particle: impl Into<String>) -> Self {
        self.non_dropping_particle = Some(particle.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn given(&self) -> Option<&str> {
        self.given.as_deref()
    }

    pub fn dropping_particle(&self) -> Option<&str> {
        self.dropping_particle.as_deref()
    }

    pub fn non_dropping_particle(&self) -> Option<&str> {
        self.non_dropping_particle.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Particles and family joined, e.g. "van der Voort".
    pub fn full_family(&self) -> String {
        let mut parts = Vec::new();
        if let Some(ref dp) = self.dropping_particle {
            parts.push(dp.as_str());
        }
        if let Some(ref ndp) = self.non_dropping_particle {
            parts.push(ndp.as_str());
        }
        parts.push(&self.family);
        parts.join(" ")
    }

    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(ref given) = self.given {
            parts.push(given.clone());
        }
        parts.push(self.full_family());
        if let Some(ref suffix) = self.suffix {
            parts.push(suffix.clone());
        }
        parts.join(" ")
    }

    pub fn sort_name(&self) -> String {
        let mut out = self.full_family();
        if let Some(ref given) = self.given {
            out.push_str(", ");
            out.push_str(given);
        }
        if let Some(ref suffix) = self.suffix {
            out.push_str(", ");
            out.push_str(suffix);
        }
        out
    }

    pub fn to_bibtex(&self) -> String {
        let mut out = self.full_family();
        match (&self.suffix, &self.given) {
            (Some(suffix), given) => {
                out.push_str(", ");
                out.push_str(suffix);
                out.push_str(", ");
                out.push_str(given.as_deref().unwrap_or_default());
            }
            (None, Some(given)) => {
                out.push_str(", ");
                out.push_str(given);
            }
            // A bare multi-word family would read back as "given family".
            (None, None) if out.contains(|c: char| c.is_whitespace() || c == ',') => {
                out.push(',');
            }
            (None, None) => {}
        }
        out
    }
}

impl LiteralName {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            literal: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.literal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_sort_names() {
        let name: NameRecord = PersonName::new("Voort")
            .with_given("Vincent")
            .with_non_dropping_particle("van der")
            .with_suffix("Jr.")
            .into();
        assert_eq!(name.display_name(), "Vincent van der Voort Jr.");
        assert_eq!(name.sort_name(), "van der Voort, Vincent, Jr.");
        assert_eq!(name.to_bibtex(), "van der Voort, Jr., Vincent");
    }

    #[test]
    fn test_family_only() {
        let name = PersonName::new("Thompson");
        assert_eq!(name.display_name(), "Thompson");
        assert_eq!(name.sort_name(), "Thompson");
        assert_eq!(name.to_bibtex(), "Thompson");
    }

    #[test]
    fn test_dropping_particle_leads_full_family() {
        let name = PersonName::new("Beethoven")
            .with_given("Ludwig")
            .with_dropping_particle("van");
        assert_eq!(name.full_family(), "van Beethoven");
        assert_eq!(name.non_dropping_particle(), None);
    }

    #[test]
    fn test_literal_accessors() {
        let name = NameRecord::literal("World Health Organization");
        assert!(name.is_literal());
        assert!(name.as_structured().is_none());
        assert_eq!(name.as_literal(), Some("World Health Organization"));
        assert_eq!(name.to_bibtex(), "{World Health Organization}");
    }

    #[test]
    fn test_literal_bibtex_wraps_in_braces() {
        assert_eq!(NameRecord::literal("A {B} C").to_bibtex(), "{A {B} C}");
        // Unbalanced input is wrapped as is; it cannot be protected.
        assert_eq!(
            NameRecord::literal("Smith} and jones}").to_bibtex(),
            "{Smith} and jones}}"
        );
    }

    #[test]
    fn test_csl_json_keys() {
        let name: NameRecord = PersonName::new("Gerwen")
            .with_given("Michael")
            .with_non_dropping_particle("van")
            .into();
        insta::assert_snapshot!(
            serde_json::to_string(&name).unwrap(),
            @r#"{"family":"Gerwen","given":"Michael","non-dropping-particle":"van"}"#
        );
        insta::assert_snapshot!(
            serde_json::to_string(&NameRecord::literal("Anonymous")).unwrap(),
            @r#"{"literal":"Anonymous"}"#
        );
    }

    #[test]
    fn test_deserialize_picks_variant_by_keys() {
        let structured: NameRecord =
            serde_json::from_str(r#"{"family": "Beethoven", "dropping-particle": "van"}"#).unwrap();
        assert_eq!(
            structured.as_structured().and_then(|n| n.dropping_particle()),
            Some("van")
        );

        let literal: NameRecord = serde_json::from_str(r#"{"literal": "Research Team"}"#).unwrap();
        assert_eq!(literal.as_literal(), Some("Research Team"));
    }
}
