//! Bounds-checked, non-owning views over contiguous memory.
//!
//! A view is a (pointer, length) pair borrowed from whoever owns the
//! memory: an arena region, a `Vec`, a stack array. The lifetime `'a`
//! ties the view to that owner, so a view can never outlive its data.
//!
//! Every indexed access is checked against the length, in release builds
//! too. An index at or past the end is a
//! [`Violation::OutOfBounds`](crate::contract::Violation::OutOfBounds) and
//! halts; nothing is ever read or written past the end.
//!
//! - [`BoundedView`] is read-only and `Copy`. It has no `set`.
//! - [`BoundedViewMut`] adds `set`/`get_mut` and hands out read-only copies
//!   via [`BoundedViewMut::as_view`].

use std::fmt;

use crate::contract::{self, Violation};
use crate::optional::Optional;

/// A read-only, bounds-checked view of `len` elements.
///
/// Copying a view copies the pointer and length only. There is no write
/// path:
///
/// ```compile_fail
/// use keel_core::BoundedView;
///
/// let data = [1u32, 2, 3];
/// let view = BoundedView::new(&data);
/// view.set(0, 9);
/// ```
#[derive(Clone, Copy)]
pub struct BoundedView<'a, T> {
    data: &'a [T],
}

impl<'a, T> BoundedView<'a, T> {
    /// View an entire slice.
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// View the first `len` elements of `base`.
    ///
    /// # Panics
    ///
    /// Contract violation ([`Violation::LengthExceedsBase`]) if `base` holds
    /// fewer than `len` elements.
    #[track_caller]
    pub fn of(base: &'a [T], len: usize) -> Self {
        if len > base.len() {
            contract::violated(Violation::LengthExceedsBase {
                len,
                available: base.len(),
            });
        }
        Self { data: &base[..len] }
    }

    /// An empty view.
    pub fn empty() -> Self {
        Self { data: &[] }
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow element `index`.
    ///
    /// # Panics
    ///
    /// Contract violation if `index >= len()`.
    #[track_caller]
    pub fn get_ref(&self, index: usize) -> &'a T {
        contract::check_index(index, self.data.len());
        &self.data[index]
    }

    /// Probe element `index` without halting on a bad index.
    pub fn get_checked(&self, index: usize) -> Optional<&'a T> {
        self.data.get(index).into()
    }

    /// A view of `len` elements starting at `start`.
    ///
    /// # Panics
    ///
    /// Contract violation if `start + len` exceeds `len()`.
    #[track_caller]
    pub fn subview(&self, start: usize, len: usize) -> Self {
        let end = match start.checked_add(len) {
            Some(end) if end <= self.data.len() => end,
            _ => contract::violated(Violation::OutOfBounds {
                index: start.saturating_add(len),
                len: self.data.len(),
            }),
        };
        Self {
            data: &self.data[start..end],
        }
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T: Copy> BoundedView<'_, T> {
    /// Copy out element `index`.
    ///
    /// # Panics
    ///
    /// Contract violation if `index >= len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> T {
        *self.get_ref(index)
    }
}

impl<'a, T> From<&'a [T]> for BoundedView<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T> IntoIterator for BoundedView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedView")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for BoundedView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// A writable, bounds-checked view of `len` elements.
///
/// Not `Copy`: at most one writable view of a given region exists at a time.
/// Use [`reborrow`](Self::reborrow) to lend it out temporarily.
pub struct BoundedViewMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> BoundedViewMut<'a, T> {
    /// View an entire mutable slice.
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// View the first `len` elements of `base`.
    ///
    /// # Panics
    ///
    /// Contract violation ([`Violation::LengthExceedsBase`]) if `base` holds
    /// fewer than `len` elements.
    #[track_caller]
    pub fn of(base: &'a mut [T], len: usize) -> Self {
        if len > base.len() {
            contract::violated(Violation::LengthExceedsBase {
                len,
                available: base.len(),
            });
        }
        Self {
            data: &mut base[..len],
        }
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow element `index`.
    ///
    /// # Panics
    ///
    /// Contract violation if `index >= len()`.
    #[track_caller]
    pub fn get_ref(&self, index: usize) -> &T {
        contract::check_index(index, self.data.len());
        &self.data[index]
    }

    /// Mutably borrow element `index`.
    ///
    /// # Panics
    ///
    /// Contract violation if `index >= len()`.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        contract::check_index(index, self.data.len());
        &mut self.data[index]
    }

    /// Overwrite element `index`.
    ///
    /// # Panics
    ///
    /// Contract violation if `index >= len()`. Nothing is written.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) {
        *self.get_mut(index) = value;
    }

    /// Probe element `index` without halting on a bad index.
    pub fn get_checked(&self, index: usize) -> Optional<&T> {
        self.data.get(index).into()
    }

    /// A read-only copy of this view, valid while `self` is borrowed.
    pub fn as_view(&self) -> BoundedView<'_, T> {
        BoundedView { data: self.data }
    }

    /// Give up write access, keeping the full lifetime.
    pub fn into_view(self) -> BoundedView<'a, T> {
        BoundedView { data: self.data }
    }

    /// Lend out a shorter-lived writable view of the same elements.
    pub fn reborrow(&mut self) -> BoundedViewMut<'_, T> {
        BoundedViewMut {
            data: &mut *self.data,
        }
    }

    /// A writable view of `len` elements starting at `start`.
    ///
    /// # Panics
    ///
    /// Contract violation if `start + len` exceeds `len()`.
    #[track_caller]
    pub fn subview_mut(&mut self, start: usize, len: usize) -> BoundedViewMut<'_, T> {
        let end = match start.checked_add(len) {
            Some(end) if end <= self.data.len() => end,
            _ => contract::violated(Violation::OutOfBounds {
                index: start.saturating_add(len),
                len: self.data.len(),
            }),
        };
        BoundedViewMut {
            data: &mut self.data[start..end],
        }
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &[T] {
        self.data
    }

    /// The underlying mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data
    }
}

impl<T: Copy> BoundedViewMut<'_, T> {
    /// Copy out element `index`.
    ///
    /// # Panics
    ///
    /// Contract violation if `index >= len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> T {
        *self.get_ref(index)
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Copy every element of `src` into this view.
    ///
    /// # Panics
    ///
    /// Contract violation ([`Violation::LengthMismatch`]) if the lengths
    /// differ.
    #[track_caller]
    pub fn copy_from(&mut self, src: BoundedView<'_, T>) {
        if src.len() != self.data.len() {
            contract::violated(Violation::LengthMismatch {
                dst: self.data.len(),
                src: src.len(),
            });
        }
        self.data.copy_from_slice(src.as_slice());
    }
}

impl<'a, T> From<&'a mut [T]> for BoundedViewMut<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self::new(data)
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedViewMut")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut buf = [0i32; 10];
        let mut view = BoundedViewMut::new(&mut buf);
        view.set(3, 77);
        assert_eq!(view.get(3), 77);
        assert_eq!(buf[3], 77);
    }

    #[test]
    fn accepts_every_index_below_len() {
        let buf = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let view = BoundedView::new(&buf);
        for i in 0..10 {
            assert_eq!(view.get(i), buf[i]);
        }
    }

    #[test]
    #[should_panic(expected = "index out of bounds: index 10, len 10")]
    fn get_at_len_is_violation() {
        let buf = [0u8; 10];
        BoundedView::new(&buf).get(10);
    }

    #[test]
    #[should_panic(expected = "index out of bounds: index 4, len 4")]
    fn set_at_len_is_violation() {
        let mut buf = [0u8; 4];
        BoundedViewMut::new(&mut buf).set(4, 1);
    }

    #[test]
    fn rejected_set_writes_nothing() {
        let mut buf = [5u8; 4];
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            BoundedViewMut::new(&mut buf).set(9, 0);
        }));
        assert!(result.is_err());
        assert_eq!(buf, [5u8; 4]);
    }

    #[test]
    fn of_narrows_to_length() {
        let buf = [1, 2, 3, 4];
        let view = BoundedView::of(&buf, 2);
        assert_eq!(view.len(), 2);
        assert!(view.get_checked(2).is_empty());
    }

    #[test]
    #[should_panic(expected = "contract violation: view length exceeds base: len 4, available 3")]
    fn of_longer_than_base_is_violation() {
        let buf = [1, 2, 3];
        BoundedView::of(&buf, 4);
    }

    #[test]
    #[should_panic(expected = "contract violation: view length exceeds base: len 5, available 2")]
    fn mutable_of_longer_than_base_is_violation() {
        let mut buf = [0u8; 2];
        BoundedViewMut::of(&mut buf, 5);
    }

    #[test]
    fn copies_share_data() {
        let buf = [9u16; 3];
        let a = BoundedView::new(&buf);
        let b = a;
        assert_eq!(a.as_slice().as_ptr(), b.as_slice().as_ptr());
        assert_eq!(a, b);
    }

    #[test]
    fn subview_offsets_indices() {
        let buf = [0, 1, 2, 3, 4, 5];
        let sub = BoundedView::new(&buf).subview(2, 3);
        assert_eq!(sub.as_slice(), &[2, 3, 4]);
        assert_eq!(sub.get(0), 2);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn subview_past_end_is_violation() {
        let buf = [0u8; 6];
        BoundedView::new(&buf).subview(4, 3);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn subview_overflowing_start_is_violation() {
        let buf = [0u8; 6];
        BoundedView::new(&buf).subview(usize::MAX, 2);
    }

    #[test]
    fn mutable_subview_writes_through() {
        let mut buf = [0u8; 6];
        let mut view = BoundedViewMut::new(&mut buf);
        view.subview_mut(1, 2).fill(7);
        assert_eq!(view.as_slice(), &[0, 7, 7, 0, 0, 0]);
    }

    #[test]
    fn copy_from_equal_lengths() {
        let src = [1u32, 2, 3];
        let mut dst = [0u32; 3];
        BoundedViewMut::new(&mut dst).copy_from(BoundedView::new(&src));
        assert_eq!(dst, src);
    }

    #[test]
    #[should_panic(expected = "length mismatch: destination 2, source 3")]
    fn copy_from_mismatched_lengths_is_violation() {
        let src = [1u32, 2, 3];
        let mut dst = [0u32; 2];
        BoundedViewMut::new(&mut dst).copy_from(BoundedView::new(&src));
    }

    #[test]
    fn reborrow_and_into_view() {
        let mut buf = [0i64; 2];
        let mut view = BoundedViewMut::new(&mut buf);
        {
            let mut inner = view.reborrow();
            inner.set(1, -4);
        }
        *view.get_mut(0) = 8;
        let read = view.into_view();
        assert_eq!(read.iter().copied().sum::<i64>(), 4);
    }

    #[test]
    fn empty_view_rejects_index_zero_probe() {
        let view = BoundedView::<u8>::empty();
        assert!(view.is_empty());
        assert!(view.get_checked(0).is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn get_after_set_returns_value(
                len in 1usize..256,
                seed in proptest::collection::vec(any::<i32>(), 1..64),
                x in any::<i32>(),
            ) {
                let mut buf: Vec<i32> = seed.iter().copied().cycle().take(len).collect();
                let mut view = BoundedViewMut::new(&mut buf);
                for i in 0..len {
                    view.set(i, x);
                    prop_assert_eq!(view.get(i), x);
                }
            }

            #[test]
            fn indices_past_end_never_resolve(len in 0usize..64, past in 0usize..1000) {
                let buf = vec![0u8; len];
                let view = BoundedView::new(&buf);
                let index = len + past;
                prop_assert!(view.get_checked(index).is_empty());
                let caught = std::panic::catch_unwind(|| view.get(index));
                prop_assert!(caught.is_err());
            }
        }
    }
}
