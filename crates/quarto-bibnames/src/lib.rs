//! Personal-name parsing for bibliographic author and editor fields.
//!
//! This crate takes the free-form text found in a BibTeX `author` or `editor`
//! field and produces CSL name records:
//!
//! ```text
//! "van Gerwen, Michael and Henry Ford III"
//!     │
//!     ▼
//! [ {family: "Gerwen", given: "Michael", non-dropping-particle: "van"},
//!   {family: "Ford",   given: "Henry",   suffix: "III"} ]
//! ```
//!
//! Parsing never fails. Text that cannot be read as a list of names comes
//! back as a single [`NameRecord::Literal`] holding the original string.
//!
//! # Example
//!
//! ```rust
//! use quarto_bibnames::{parse, NameRecord};
//!
//! let names = parse("Michael van Gerwen and Van der Voort, Vincent");
//! assert_eq!(names.len(), 2);
//!
//! let first = names[0].as_structured().unwrap();
//! assert_eq!(first.given(), Some("Michael"));
//! assert_eq!(first.non_dropping_particle(), Some("van"));
//! assert_eq!(first.family(), "Gerwen");
//!
//! let prose = "Jerry Peek and other authors of the Nutshell handbooks";
//! assert_eq!(parse(prose), vec![NameRecord::literal(prose)]);
//! ```

pub mod config;
pub mod name;
pub mod parser;
pub mod tokenizer;
pub mod vocabulary;

pub use config::{ConfigError, ParserConfig};
pub use name::{LiteralName, NameRecord, PersonName};
pub use parser::NameParser;

/// Parse an author field with the default configuration.
pub fn parse(input: &str) -> Vec<NameRecord> {
    NameParser::default().parse(input)
}
