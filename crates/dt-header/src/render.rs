//! The module containing the macro renderer.

use std::fmt;

use indexmap::IndexMap;

use crate::Node;

/// The first line of every generated header.
pub const BANNER: &str = "/* Auto-generated devicetree header */";

/// The default first segment of every macro name.
pub const DEFAULT_MACRO_PREFIX: &str = "DT";

/// Options for [`Header::with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prepended to every macro name, followed by `_`
    pub macro_prefix: String,
    /// If set, the definitions are wrapped in `#ifndef` / `#define` / `#endif`
    pub include_guard: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            macro_prefix: DEFAULT_MACRO_PREFIX.to_owned(),
            include_guard: None,
        }
    }
}

/// A single `#define NAME VALUE` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    pub name: String,
    pub value: String,
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#define {} {}", self.name, self.value)
    }
}

/// The macros of all nodes sharing a type, headed by a `/** type **/` banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'n> {
    pub node_type: &'n str,
    pub macros: Vec<Macro>,
}

/// A rendered header document.
///
/// Sections are ordered by the first occurrence of their node type, and macros within a
/// section by node and then property order. Use [`Display`](fmt::Display) or
/// [`write_to`](Header::write_to) to get the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'n> {
    pub sections: Vec<Section<'n>>,
    pub include_guard: Option<String>,
}

impl<'n> Header<'n> {
    /// Renders `nodes` with the default [`RenderOptions`].
    #[must_use]
    pub fn new(nodes: &'n [Node]) -> Self {
        Self::with_options(nodes, &RenderOptions::default())
    }

    #[must_use]
    pub fn with_options(nodes: &'n [Node], options: &RenderOptions) -> Self {
        let mut groups: IndexMap<&str, Vec<Macro>> = IndexMap::new();
        for node in nodes {
            let label = macro_segment(&node.label);
            groups
                .entry(&node.node_type)
                .or_default()
                .extend(node.properties.iter().map(|(key, value)| Macro {
                    name: format!("{}_{label}_{}", options.macro_prefix, macro_segment(key)),
                    value: value.to_string(),
                }));
        }

        Self {
            sections: groups
                .into_iter()
                .map(|(node_type, macros)| Section { node_type, macros })
                .collect(),
            include_guard: options.include_guard.clone(),
        }
    }

    /// Returns the macro names that are defined more than once, in order of first definition.
    ///
    /// The header still contains every definition; this is only for reporting.
    #[must_use]
    pub fn collisions(&self) -> Vec<&str> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for definition in self.sections.iter().flat_map(|section| &section.macros) {
            *counts.entry(&definition.name).or_default() += 1;
        }
        counts
            .into_iter()
            .filter_map(|(name, count)| (count > 1).then_some(name))
            .collect()
    }

    /// Writes the header text to `sink`.
    ///
    /// # Errors
    ///
    /// Only returns errors from `sink`.
    pub fn write_to(&self, sink: &mut impl fmt::Write) -> fmt::Result {
        sink.write_str(BANNER)?;
        if let Some(guard) = &self.include_guard {
            write!(sink, "\n#ifndef {guard}\n#define {guard}")?;
        }
        sink.write_char('\n')?;

        for section in &self.sections {
            write!(sink, "\n/** {} **/", section.node_type)?;
            for definition in &section.macros {
                write!(sink, "\n{definition}")?;
            }
            sink.write_char('\n')?;
        }

        if let Some(guard) = &self.include_guard {
            writeln!(sink, "\n#endif /* {guard} */")?;
        }
        Ok(())
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Turns a label or property key into a macro name segment: upper case, `-` becomes `_`.
///
/// ```
/// assert_eq!(dt_header::macro_segment("current-speed"), "CURRENT_SPEED");
/// ```
#[must_use]
pub fn macro_segment(name: &str) -> String {
    name.to_uppercase().replace('-', "_")
}
