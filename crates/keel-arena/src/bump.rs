//! Fixed-capacity bump arena over a caller-supplied buffer.
//!
//! An [`Arena`] hands out non-overlapping [`Region`]s of its buffer by
//! advancing a cursor. There is no per-region free; [`Arena::reset`]
//! reclaims everything at once and starts a new generation.
//!
//! # Validity of regions and views
//!
//! Two mechanisms keep stale memory unreachable:
//!
//! - Views ([`BoundedView`], [`BoundedViewMut`]) borrow the arena, so the
//!   borrow checker rejects `reset` while any view is alive.
//! - Regions are plain handles that outlive borrows. Each records the arena
//!   ID and generation it was carved in; resolving it after a reset fails
//!   with [`ArenaError::StaleRegion`], and resolving it against another
//!   arena fails with [`ArenaError::ForeignRegion`].

use std::mem;
use std::ops::Range;

use bytemuck::{Pod, PodCastError};
use keel_core::{ArenaId, BoundedView, BoundedViewMut, Generation, Optional};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::Region;
use crate::plan::{RegionPlan, RegionTable};
use crate::stats::ArenaStats;

/// Bump allocator over a fixed byte buffer.
///
/// `B` is any byte storage: `&mut [u8]` to borrow caller memory, or an
/// owned `Vec<u8>`, `Box<[u8]>` or `[u8; N]`. The arena never resizes or
/// frees the buffer; [`Arena::into_inner`] hands it back.
///
/// Alignment is computed against the buffer's real address, so a region
/// allocated with `align_of::<T>()` can always be viewed as `[T]` while the
/// buffer stays where it is. Moving an arena that stores an inline array
/// moves the buffer; views then report [`ArenaError::Misaligned`] instead
/// of producing misaligned references.
///
/// Not internally synchronised: allocation and reset take `&mut self`.
pub struct Arena<B> {
    buffer: B,
    used: usize,
    generation: Generation,
    id: ArenaId,
    config: ArenaConfig,
    high_water: usize,
    allocations: u64,
    failed_allocations: u64,
    padding_bytes: usize,
    resets: u64,
}

impl<B> Arena<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Bind an arena to `buffer` with the default [`ArenaConfig`].
    pub fn new(buffer: B) -> Self {
        Self::from_parts(buffer, ArenaConfig::default())
    }

    /// Bind an arena to `buffer` with an explicit configuration.
    pub fn with_config(buffer: B, config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self::from_parts(buffer, config))
    }

    fn from_parts(buffer: B, config: ArenaConfig) -> Self {
        Self {
            buffer,
            used: 0,
            generation: Generation::INITIAL,
            id: ArenaId::next(),
            config,
            high_water: 0,
            allocations: 0,
            failed_allocations: 0,
            padding_bytes: 0,
            resets: 0,
        }
    }

    /// Allocate `size` bytes at the configured default alignment.
    ///
    /// Returns an empty [`Optional`] when the arena cannot fit the request;
    /// the arena is unchanged in that case.
    pub fn alloc(&mut self, size: usize) -> Optional<Region> {
        self.alloc_aligned(size, self.config.default_align).ok().into()
    }

    /// Allocate `size` bytes whose start address is a multiple of `align`.
    ///
    /// Padding skipped to reach alignment counts against capacity. A
    /// zero-size request succeeds with a zero-length region as long as the
    /// aligned cursor is still inside the buffer.
    ///
    /// Placement is O(1). With [`ArenaConfig::zero_fill`] on (the default)
    /// the granted bytes are also cleared, which makes the call O(`size`);
    /// build the arena with `with_zero_fill(false)` on hot paths that
    /// overwrite every byte anyway.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::InvalidAlignment`] if `align` is not a power of two.
    /// - [`ArenaError::OutOfMemory`] if the aligned request does not fit.
    ///   `used` is left unchanged.
    pub fn alloc_aligned(&mut self, size: usize, align: usize) -> Result<Region, ArenaError> {
        if !align.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment { align });
        }
        let Some(span) = self.fit(self.used, size, align) else {
            self.failed_allocations += 1;
            return Err(ArenaError::OutOfMemory {
                requested: size,
                remaining: self.remaining(),
            });
        };
        Ok(self.commit(span))
    }

    /// Allocate room for `len` values of `T` at `T`'s alignment.
    ///
    /// # Errors
    ///
    /// [`ArenaError::OutOfMemory`] if the request does not fit, including
    /// when `len * size_of::<T>()` overflows.
    pub fn alloc_slice<T: Pod>(&mut self, len: usize) -> Result<Region, ArenaError> {
        let Some(size) = len.checked_mul(mem::size_of::<T>()) else {
            self.failed_allocations += 1;
            return Err(ArenaError::OutOfMemory {
                requested: usize::MAX,
                remaining: self.remaining(),
            });
        };
        self.alloc_aligned(size, mem::align_of::<T>())
    }

    /// Allocate `len` zero-initialised values of `T` and view them.
    ///
    /// Zero is a valid bit pattern for every `Pod` type. With
    /// [`ArenaConfig::zero_fill`] off, the contents are whatever the buffer
    /// held.
    pub fn alloc_view_mut<T: Pod>(
        &mut self,
        len: usize,
    ) -> Result<BoundedViewMut<'_, T>, ArenaError> {
        let region = self.alloc_slice::<T>(len)?;
        self.view_mut(region)
    }

    /// Allocate every request of `plan`, or none of them.
    ///
    /// Requests are placed in plan order. If any does not fit, nothing is
    /// allocated and `used` is unchanged.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::DuplicateRegion`] if two requests share a name.
    /// - [`ArenaError::InvalidAlignment`] for a bad alignment.
    /// - [`ArenaError::OutOfMemory`] if the plan does not fit; `requested`
    ///   is what the whole plan needs from the current cursor.
    pub fn reserve(&mut self, plan: &RegionPlan) -> Result<RegionTable, ArenaError> {
        plan.validate()?;

        let mut cursor = self.used;
        let mut spans = Vec::with_capacity(plan.len());
        for request in plan.requests() {
            match self.place(cursor, request.size, request.align) {
                Some(span) => {
                    cursor = span.end;
                    spans.push(span);
                }
                None => {
                    cursor = usize::MAX;
                    break;
                }
            }
        }

        // Spans are laid out in increasing order, so the last end decides.
        if cursor > self.capacity() {
            self.failed_allocations += 1;
            return Err(ArenaError::OutOfMemory {
                requested: cursor - self.used,
                remaining: self.remaining(),
            });
        }

        let mut table = RegionTable::with_capacity(plan.len());
        for (request, span) in plan.requests().iter().zip(spans) {
            let region = self.commit(span);
            table.insert(request.name.clone(), region);
        }
        Ok(table)
    }

    /// Reclaim every region at once and start a new generation.
    ///
    /// Views cannot be alive here (this takes `&mut self`). Regions carved
    /// before the reset fail to resolve afterwards.
    pub fn reset(&mut self) {
        self.used = 0;
        self.generation = self.generation.next();
        self.resets += 1;
    }

    /// The bytes of `region`.
    pub fn bytes(&self, region: Region) -> Result<&[u8], ArenaError> {
        let range = self.resolve(region)?;
        Ok(&self.buffer.as_ref()[range])
    }

    /// The bytes of `region`, writable.
    pub fn bytes_mut(&mut self, region: Region) -> Result<&mut [u8], ArenaError> {
        let range = self.resolve(region)?;
        Ok(&mut self.buffer.as_mut()[range])
    }

    /// A read-only typed view of `region`.
    ///
    /// # Errors
    ///
    /// Resolution errors from [`bytes`](Self::bytes), plus
    /// [`ArenaError::Misaligned`] / [`ArenaError::SizeMismatch`] if the
    /// region is not a valid `[T]`.
    pub fn view<T: Pod>(&self, region: Region) -> Result<BoundedView<'_, T>, ArenaError> {
        let bytes = self.bytes(region)?;
        bytemuck::try_cast_slice(bytes)
            .map(BoundedView::new)
            .map_err(|e| cast_error::<T>(e, region))
    }

    /// A writable typed view of `region`.
    ///
    /// # Errors
    ///
    /// As for [`view`](Self::view).
    pub fn view_mut<T: Pod>(
        &mut self,
        region: Region,
    ) -> Result<BoundedViewMut<'_, T>, ArenaError> {
        let bytes = self.bytes_mut(region)?;
        bytemuck::try_cast_slice_mut(bytes)
            .map(BoundedViewMut::new)
            .map_err(|e| cast_error::<T>(e, region))
    }

    /// Whether `region` still resolves in this arena.
    pub fn is_live(&self, region: Region) -> bool {
        self.resolve(region).is_ok()
    }

    /// Buffer size in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// Bytes handed out in the current generation, padding included.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.used
    }

    /// The current generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// This arena's unique ID.
    pub fn id(&self) -> ArenaId {
        self.id
    }

    /// The configuration the arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Snapshot of fill level and cumulative counters.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            capacity: self.capacity(),
            used: self.used,
            high_water: self.high_water,
            generation: self.generation,
            allocations: self.allocations,
            failed_allocations: self.failed_allocations,
            padding_bytes: self.padding_bytes,
            resets: self.resets,
        }
    }

    /// Release the buffer.
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Where an allocation of `size` at `align` would land with the cursor
    /// at `cursor`, or `None` if it does not fit.
    fn fit(&self, cursor: usize, size: usize, align: usize) -> Option<Range<usize>> {
        self.place(cursor, size, align)
            .filter(|span| span.end <= self.capacity())
    }

    /// Aligned placement relative to the buffer's address, ignoring
    /// capacity. `None` only on address-space overflow.
    fn place(&self, cursor: usize, size: usize, align: usize) -> Option<Range<usize>> {
        let base = self.buffer.as_ref().as_ptr() as usize;
        let addr = base.checked_add(cursor)?;
        let aligned = addr.checked_add(align - 1)? & !(align - 1);
        let start = aligned - base;
        let end = start.checked_add(size)?;
        Some(start..end)
    }

    /// Advance the cursor to the end of `span` and hand out its region.
    fn commit(&mut self, span: Range<usize>) -> Region {
        self.padding_bytes += span.start - self.used;
        self.used = span.end;
        self.high_water = self.high_water.max(self.used);
        self.allocations += 1;
        if self.config.zero_fill {
            self.buffer.as_mut()[span.clone()].fill(0);
        }
        Region::new(self.id, self.generation, span.start, span.len())
    }

    fn resolve(&self, region: Region) -> Result<Range<usize>, ArenaError> {
        if region.arena != self.id {
            return Err(ArenaError::ForeignRegion {
                region_arena: region.arena,
                arena: self.id,
            });
        }
        if region.generation != self.generation {
            return Err(ArenaError::StaleRegion {
                region_generation: region.generation,
                current: self.generation,
            });
        }
        Ok(region.offset..region.end())
    }
}

/// Translate a bytemuck cast failure into the arena's error vocabulary.
fn cast_error<T>(err: PodCastError, region: Region) -> ArenaError {
    match err {
        PodCastError::TargetAlignmentGreaterAndInputNotAligned
        | PodCastError::AlignmentMismatch => ArenaError::Misaligned {
            align: mem::align_of::<T>(),
            offset: region.offset,
        },
        _ => ArenaError::SizeMismatch {
            len: region.len,
            elem_size: mem::size_of::<T>(),
        },
    }
}
