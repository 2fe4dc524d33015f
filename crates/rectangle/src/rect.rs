//! `Rectangle` value object and its restartable dimension walk.

use std::iter::FusedIterator;

use crate::dimension::Dimension;

/// Rectangle with integer `length` and `width` (no invariants enforced).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub length: i64,
    pub width: i64,
}

impl Rectangle {
    #[inline]
    pub fn new(length: i64, width: i64) -> Self {
        Self { length, width }
    }

    #[inline]
    pub fn length(&self) -> i64 {
        self.length
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.width
    }

    #[inline]
    pub fn set_length(&mut self, length: i64) {
        self.length = length;
    }

    #[inline]
    pub fn set_width(&mut self, width: i64) {
        self.width = width;
    }

    /// Fresh walk over `{"length": ..}` then `{"width": ..}`.
    ///
    /// Each element is read from the current field values when it is produced.
    /// Every call starts again from `length`.
    #[inline]
    pub fn dimensions(&self) -> Dimensions<'_> {
        Dimensions {
            rect: self,
            next: 0,
        }
    }

    /// The same two elements as `dimensions`, collected.
    #[inline]
    pub fn to_dimensions(&self) -> [Dimension; 2] {
        [Dimension::Length(self.length), Dimension::Width(self.width)]
    }
}

impl From<(i64, i64)> for Rectangle {
    fn from((length, width): (i64, i64)) -> Self {
        Self::new(length, width)
    }
}

impl<'a> IntoIterator for &'a Rectangle {
    type Item = Dimension;
    type IntoIter = Dimensions<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.dimensions()
    }
}

/// Lazy two-element iterator returned by `Rectangle::dimensions`.
#[derive(Clone, Debug)]
pub struct Dimensions<'a> {
    rect: &'a Rectangle,
    next: u8, // 0 = length, 1 = width, 2 = done
}

impl Iterator for Dimensions<'_> {
    type Item = Dimension;

    fn next(&mut self) -> Option<Dimension> {
        let item = match self.next {
            0 => Dimension::Length(self.rect.length),
            1 => Dimension::Width(self.rect.width),
            _ => return None,
        };
        self.next += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = 2usize.saturating_sub(self.next as usize);
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Dimensions<'_> {}
impl FusedIterator for Dimensions<'_> {}
