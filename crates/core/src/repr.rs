//! Structural representation and construction logging.
//!
//! A [`Representation`] is an ordered list of labelled values rendered as
//! `TypeName(a, b, key=value)`, each value in its `Debug` form. Catalog
//! entities build one explicitly from their fields instead of relying on
//! reflection: the caller decides which fields appear and in what order.

use core::fmt::{self, Debug, Write as _};

use crate::diagnostics;

enum Part<'a> {
    Arg(&'a dyn Debug),
    Field(&'static str, &'a dyn Debug),
}

/// Builder for `TypeName(...)` style renderings.
pub struct Representation<'a> {
    type_name: &'static str,
    parts: Vec<Part<'a>>,
}

impl<'a> Representation<'a> {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            parts: Vec::new(),
        }
    }

    /// Append a positional value.
    pub fn arg(mut self, value: &'a dyn Debug) -> Self {
        self.parts.push(Part::Arg(value));
        self
    }

    /// Append a `key=value` pair.
    pub fn field(mut self, key: &'static str, value: &'a dyn Debug) -> Self {
        self.parts.push(Part::Field(key, value));
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Render into a fresh string.
    ///
    /// Fails if any value's `Debug` implementation reports an error; the
    /// partial output is discarded.
    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        write!(out, "{self}")?;
        Ok(out)
    }
}

impl fmt::Display for Representation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_name)?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match part {
                Part::Arg(value) => write!(f, "{value:?}")?,
                Part::Field(key, value) => write!(f, "{key}={value:?}")?,
            }
        }
        f.write_str(")")
    }
}

/// Entities that expose a structural representation.
pub trait Described {
    /// Concrete type name used in renderings (`Product`, `Smartphone`, ...).
    fn type_name(&self) -> &'static str;

    /// Named fields first, then variant-specific extras as `key=value`.
    fn representation(&self) -> Representation<'_>;
}

/// Emit a construction record for a freshly built entity.
///
/// Never fails: if the arguments cannot be rendered, a short
/// `Создан объект {TypeName}` line is emitted instead.
pub fn log_construction(record: &Representation<'_>) {
    match record.render() {
        Ok(line) => diagnostics::emit(line),
        Err(_) => {
            tracing::warn!(type_name = record.type_name(), "construction arguments could not be rendered");
            diagnostics::emit(format!("Создан объект {}", record.type_name()));
        }
    }
}
