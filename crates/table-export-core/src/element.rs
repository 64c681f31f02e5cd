//! Identifier-or-reference element arguments

use crate::error::{Error, Result};
use crate::table::Table;

/// Something that can find elements by id.
///
/// Implemented for [`Document`](crate::Document) natively and for the DOM in
/// the browser bindings.
pub trait ElementLookup {
    /// Handle to a resolved element
    type Handle;

    /// Look up an element by its id
    fn element_by_id(&self, id: &str) -> Option<Self::Handle>;
}

/// A table argument: either an element id or a direct element handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRef<'a, H> {
    /// Look the element up by id
    Identifier(&'a str),
    /// Use the handle as-is
    Direct(H),
}

impl<'a, H> ElementRef<'a, H> {
    /// Resolve to an element handle.
    ///
    /// A direct reference is returned unchanged; an identifier is looked up
    /// in `lookup` and fails with [`Error::NotFound`] when nothing matches.
    pub fn resolve<L>(self, lookup: L) -> Result<H>
    where
        L: ElementLookup<Handle = H>,
    {
        match self {
            ElementRef::Direct(handle) => Ok(handle),
            ElementRef::Identifier(id) => lookup
                .element_by_id(id)
                .ok_or_else(|| Error::not_found(id)),
        }
    }
}

impl<'a, H> From<&'a str> for ElementRef<'a, H> {
    fn from(id: &'a str) -> Self {
        ElementRef::Identifier(id)
    }
}

impl<'a> From<&'a Table> for ElementRef<'a, &'a Table> {
    fn from(table: &'a Table) -> Self {
        ElementRef::Direct(table)
    }
}
