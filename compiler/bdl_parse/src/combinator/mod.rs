//! Grammar-agnostic parsing combinators.
//!
//! A production is any function from a cursor to `ParseResult<Option<T>>`:
//! `Ok(Some(_))` matched, `Ok(None)` did not match (the offset is expected
//! to be where it started), `Err(_)` aborts the parse.

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

use crate::{Cursor, ParseResult};

/// Function-pointer form of a production, used for [`choice`] tables.
pub type ParseFn<'s, T> = fn(&mut Cursor<'s>) -> ParseResult<Option<T>>;

/// Run `item` until it stops matching.
pub fn zero_or_more<'s, T>(
    cursor: &mut Cursor<'s>,
    mut item: impl FnMut(&mut Cursor<'s>) -> ParseResult<Option<T>>,
) -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    while let Some(node) = item(cursor)? {
        items.push(node);
    }
    Ok(items)
}

/// Ordered choice.
///
/// Each alternative is first tried speculatively; the first one that matches
/// is run again for real and its result returned. Errors raised during the
/// speculative run propagate.
pub fn choice<'s, T>(
    cursor: &mut Cursor<'s>,
    alternatives: &[ParseFn<'s, T>],
) -> ParseResult<Option<T>> {
    for alternative in alternatives {
        if cursor.look(*alternative)?.is_some() {
            return alternative(cursor);
        }
    }
    Ok(None)
}

/// Primaries with the separators consumed between them.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Separated<T, U> {
    pub items: Vec<T>,
    pub separators: Vec<U>,
}

impl<T, U> Separated<T, U> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the last thing consumed was a separator with no primary after it.
    pub fn trailing_separator(&self) -> bool {
        !self.items.is_empty() && self.separators.len() == self.items.len()
    }

    /// Merge back into source order: item, separator, item, ...
    pub fn interleave<V>(
        self,
        mut from_item: impl FnMut(T) -> V,
        mut from_separator: impl FnMut(U) -> V,
    ) -> Vec<V> {
        let mut out = Vec::with_capacity(self.items.len() + self.separators.len());
        let mut separators = self.separators.into_iter();
        for item in self.items {
            out.push(from_item(item));
            if let Some(separator) = separators.next() {
                out.push(from_separator(separator));
            }
        }
        out
    }
}

/// Alternate `primary` and `separator`, skipping trivia around separators.
///
/// No leading primary yields an empty result. After that, a missing
/// separator or a missing primary after a separator ends the sequence; in the
/// second case the separator stays consumed and shows up as
/// [`Separated::trailing_separator`].
pub fn flip_flop<'s, T, U>(
    cursor: &mut Cursor<'s>,
    mut primary: impl FnMut(&mut Cursor<'s>) -> ParseResult<Option<T>>,
    mut separator: impl FnMut(&mut Cursor<'s>) -> ParseResult<Option<U>>,
    mut skip: impl FnMut(&mut Cursor<'s>) -> ParseResult<()>,
) -> ParseResult<Separated<T, U>> {
    let mut result = Separated {
        items: Vec::new(),
        separators: Vec::new(),
    };
    let Some(first) = primary(cursor)? else {
        return Ok(result);
    };
    result.items.push(first);

    loop {
        skip(cursor)?;
        let Some(sep) = separator(cursor)? else {
            break;
        };
        result.separators.push(sep);
        skip(cursor)?;
        let Some(item) = primary(cursor)? else {
            break;
        };
        result.items.push(item);
    }
    Ok(result)
}
