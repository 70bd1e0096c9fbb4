//! Selector parsing and matching.
//!
//! Supports the subset the slider needs from a host document:
//!
//! ```text
//! gallery            tag
//! #gallery           id
//! .photos            class
//! div#gallery.wide   compound
//! main .photos li    descendant combinators (whitespace)
//! *                  any element
//! ```
//!
//! Anything else (attribute selectors, `>`, `,`, pseudo classes) is rejected
//! with a [`SelectorError`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::arrays::{classes, core};
use super::registry;

// =============================================================================
// Types
// =============================================================================

/// Reasons a selector string fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,

    #[error("unsupported character {ch:?} at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("expected a name after {prefix:?} at position {pos}")]
    MissingName { prefix: char, pos: usize },

    #[error("duplicate id in compound at position {pos}")]
    DuplicateId { pos: usize },
}

/// One compound selector: optional tag, optional id, any number of classes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    /// Lowercase tag, `None` for `*` or when omitted.
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Compound {
    /// Check the element at `index` against this compound alone.
    pub fn matches(&self, index: usize) -> bool {
        if !registry::is_allocated(index) {
            return false;
        }
        if let Some(tag) = &self.tag {
            if core::get_tag_name(index) != *tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if registry::get_id(index).as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| classes::has_class(index, class))
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{tag}")?,
            None if self.id.is_none() && self.classes.is_empty() => write!(f, "*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// A parsed selector: compounds joined by descendant combinators, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

// =============================================================================
// Parsing
// =============================================================================

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let chars: Vec<(usize, char)> = input.char_indices().collect();
        let mut parts = Vec::new();
        let mut current: Option<Compound> = None;
        // `*` was seen in the current compound
        let mut universal = false;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];

            if ch.is_whitespace() {
                if let Some(compound) = current.take() {
                    parts.push(compound);
                }
                universal = false;
                i += 1;
                continue;
            }

            let compound = current.get_or_insert_with(Compound::default);

            match ch {
                '#' | '.' => {
                    let start = i + 1;
                    let mut end = start;
                    while end < chars.len() && is_name_char(chars[end].1) {
                        end += 1;
                    }
                    if end == start {
                        return Err(SelectorError::MissingName { prefix: ch, pos });
                    }
                    let name: String = chars[start..end].iter().map(|&(_, c)| c).collect();
                    if ch == '#' {
                        if compound.id.is_some() {
                            return Err(SelectorError::DuplicateId { pos });
                        }
                        compound.id = Some(name);
                    } else {
                        compound.classes.push(name);
                    }
                    i = end;
                }
                '*' => {
                    if universal || *compound != Compound::default() {
                        return Err(SelectorError::UnexpectedChar { ch, pos });
                    }
                    universal = true;
                    i += 1;
                }
                c if is_name_char(c) => {
                    // A tag is only valid at the start of a compound
                    if universal || *compound != Compound::default() {
                        return Err(SelectorError::UnexpectedChar { ch, pos });
                    }
                    let mut end = i;
                    while end < chars.len() && is_name_char(chars[end].1) {
                        end += 1;
                    }
                    let name: String = chars[i..end].iter().map(|&(_, c)| c).collect();
                    compound.tag = Some(name.to_ascii_lowercase());
                    i = end;
                }
                _ => return Err(SelectorError::UnexpectedChar { ch, pos }),
            }
        }

        if let Some(compound) = current.take() {
            parts.push(compound);
        }

        Ok(Self { parts })
    }

    /// Compounds, outermost first.
    pub fn parts(&self) -> &[Compound] {
        &self.parts
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Check whether the element at `index` matches.
    ///
    /// The last compound must match the element itself; each earlier compound
    /// must match some ancestor above the previous match.
    pub fn matches(&self, index: usize) -> bool {
        let Some((last, ancestors)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches(index) {
            return false;
        }

        let mut cursor = core::get_parent_index(index);
        for compound in ancestors.iter().rev() {
            loop {
                let Some(ancestor) = cursor else {
                    return false;
                };
                cursor = core::get_parent_index(ancestor);
                if compound.matches(ancestor) {
                    break;
                }
            }
        }
        true
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}
