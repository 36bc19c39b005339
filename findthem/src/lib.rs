//! Boolean text-search engine: add one or more boolean DSL expressions, then
//! run `process` against a document to learn which expressions matched.
//!
//! ```
//! use findthem::Finder;
//!
//! let mut finder = Finder::with_default_backends(false);
//! finder.add_expression(r#""lorem" AND "ipsum""#, Some("greeting".to_string())).unwrap();
//! let results = finder.process("Lorem ipsum dolor sit amet").unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].tag.as_deref(), Some("greeting"));
//! ```

mod config;
mod finder;
mod index;

pub use config::FinderConfig;
pub use finder::{ExpressionResult, Finder};

pub use findthem_syntax::ParseError;
