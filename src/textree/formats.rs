//! Output formats for parsed trees
//!
//! Every format implements [Formatter] and is looked up by name in a
//! [FormatRegistry]:
//! - `text`: the canonical reconstruction
//! - `treeviz`: one line per node with icons and truncated labels
//! - `json` / `yaml`: the [AstSnapshot](crate::textree::ast::AstSnapshot) serialized with serde

pub mod registry;
pub mod serialized;
pub mod text;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use text::TextFormatter;
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_width, TreevizFormatter};
