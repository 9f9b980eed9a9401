//! Regular file content
//!
//! A byte store is an ordered list of disk block indices plus a logical
//! byte length. It owns its blocks exclusively: no two stores ever share
//! a block index, and dropping a store returns every block to the disk's
//! free stack.
//!
//! Splitting a logical byte range across blocks happens here, so the
//! disk below only ever sees single-block operations.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::min;

use spin::Mutex;

use crate::disk::Disk;
use crate::error::FsResult;

/// A regular file's content: block list plus logical size
pub struct ByteStore {
    disk: Arc<Mutex<Disk>>,
    blocks: Vec<u32>,
    size: u64,
}

impl ByteStore {
    /// Create an empty store backed by the given disk
    pub fn new(disk: Arc<Mutex<Disk>>) -> Self {
        ByteStore {
            disk,
            blocks: Vec::new(),
            size: 0,
        }
    }

    /// Logical size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of blocks currently allocated to this store
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Read up to `buf.len()` bytes starting at `pos`.
    ///
    /// Returns the number of bytes read; short reads happen only at the
    /// end of the store. A `pos` at or past the logical size reads zero
    /// bytes.
    pub fn read(&self, pos: u64, buf: &mut [u8]) -> usize {
        if pos >= self.size {
            return 0;
        }
        let end = min(pos + buf.len() as u64, self.size);

        let disk = self.disk.lock();
        let block_size = disk.block_size() as u64;
        let mut cur = pos;
        let mut read = 0usize;
        while cur < end {
            let block = self.blocks[(cur / block_size) as usize];
            let offset = (cur % block_size) as usize;
            let chunk = min(block_size - offset as u64, end - cur) as usize;
            disk.get(block, offset, &mut buf[read..read + chunk]);
            read += chunk;
            cur += chunk as u64;
        }
        read
    }

    /// Write `data` starting at `pos`, extending the store as needed.
    ///
    /// Writing past the current end leaves a zero-filled gap: freed
    /// blocks are zeroed by the disk and fresh blocks are zero-allocated,
    /// so the gap needs no explicit clearing.
    pub fn write(&mut self, pos: u64, data: &[u8]) -> FsResult<usize> {
        let end = pos + data.len() as u64;

        let mut disk = self.disk.lock();
        let block_size = disk.block_size() as u64;

        let needed = end.div_ceil(block_size) as usize;
        let before = self.blocks.len();
        while self.blocks.len() < needed {
            match disk.alloc() {
                Ok(block) => self.blocks.push(block),
                Err(err) => {
                    // roll the partial growth back; the store is unchanged
                    for block in self.blocks.drain(before..) {
                        disk.free(block);
                    }
                    return Err(err);
                }
            }
        }

        let mut cur = pos;
        let mut written = 0usize;
        while cur < end {
            let block = self.blocks[(cur / block_size) as usize];
            let offset = (cur % block_size) as usize;
            let chunk = min(block_size - offset as u64, end - cur) as usize;
            disk.put(block, offset, &data[written..written + chunk]);
            written += chunk;
            cur += chunk as u64;
        }

        if end > self.size {
            self.size = end;
        }
        Ok(written)
    }

    /// Extend the logical size to `new_size` without writing bytes.
    ///
    /// The newly visible range reads back as zeros. Sizes at or below
    /// the current size are left untouched.
    pub fn grow(&mut self, new_size: u64) -> FsResult<()> {
        if new_size <= self.size {
            return Ok(());
        }

        let mut disk = self.disk.lock();
        let block_size = disk.block_size() as u64;
        let needed = new_size.div_ceil(block_size) as usize;
        let before = self.blocks.len();
        while self.blocks.len() < needed {
            match disk.alloc() {
                Ok(block) => self.blocks.push(block),
                Err(err) => {
                    for block in self.blocks.drain(before..) {
                        disk.free(block);
                    }
                    return Err(err);
                }
            }
        }

        self.size = new_size;
        Ok(())
    }

    /// Shrink the logical size to `new_size`, releasing trailing blocks.
    ///
    /// The retained tail of the last kept block is zeroed so a later
    /// extension observes zeros there. Sizes at or above the current
    /// size are left untouched.
    pub fn truncate(&mut self, new_size: u64) {
        if new_size >= self.size {
            return;
        }

        let mut disk = self.disk.lock();
        let block_size = disk.block_size() as u64;
        let keep = new_size.div_ceil(block_size) as usize;

        for block in self.blocks.drain(keep..) {
            disk.free(block);
        }

        let offset = (new_size % block_size) as usize;
        if offset != 0 {
            let last = self.blocks[keep - 1];
            disk.zero(last, offset, block_size as usize - offset);
        }

        log::trace!("store: truncated to {} bytes, {} blocks", new_size, keep);
        self.size = new_size;
    }

    /// Produce an independent copy of this store.
    ///
    /// Every block is copied through the disk, so the duplicate never
    /// aliases the source: mutating one side is invisible to the other.
    pub fn duplicate(&self) -> FsResult<ByteStore> {
        let mut disk = self.disk.lock();
        let mut blocks = Vec::with_capacity(self.blocks.len());
        for &block in &self.blocks {
            match disk.copy_block(block) {
                Ok(copy) => blocks.push(copy),
                Err(err) => {
                    // release what was copied so far; no partial store escapes
                    for copy in blocks {
                        disk.free(copy);
                    }
                    return Err(err);
                }
            }
        }
        Ok(ByteStore {
            disk: self.disk.clone(),
            blocks,
            size: self.size,
        })
    }
}

impl Drop for ByteStore {
    fn drop(&mut self) {
        let mut disk = self.disk.lock();
        for &block in &self.blocks {
            disk.free(block);
        }
    }
}
