//! # Devicetree header generator
//!
//! Converts a restricted subset of [Devicetree][1] source into C `#define` macros for
//! firmware that needs compile-time constants from a hardware description.
//!
//! Only top-level `label: type { key = value; };` blocks are understood. Everything else is
//! skipped: there are no nested nodes, references, includes or expressions.
//!
//! ```
//! let header = dt_header::convert("led0: gpio { pin = <13>; flags = ACTIVE_LOW; };");
//! assert_eq!(
//!     header,
//!     "/* Auto-generated devicetree header */\n\n/** gpio **/\n#define DT_LED0_PIN 13\n#define DT_LED0_FLAGS ACTIVE_LOW\n"
//! );
//! ```
//!
//! [1]: https://www.devicetree.org/

mod comment;
pub mod extract;
mod node;
mod render;
mod value;

pub use comment::strip_comments;
pub use node::{parse, Node};
pub use render::{
    macro_segment, Header, Macro, RenderOptions, Section, BANNER, DEFAULT_MACRO_PREFIX,
};
pub use value::Value;

/// Converts devicetree source text into header text with the default [`RenderOptions`].
#[must_use]
pub fn convert(text: &str) -> String {
    convert_with_options(text, &RenderOptions::default())
}

#[must_use]
pub fn convert_with_options(text: &str, options: &RenderOptions) -> String {
    let nodes = parse(text);
    Header::with_options(&nodes, options).to_string()
}
