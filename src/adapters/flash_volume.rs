//! Flash filesystem adapter
//!
//! Reads the littlefs volume MicroPython keeps in the last 1408 KiB of a
//! 2 MiB Pico's flash, through the shared embassy-rp flash driver. The
//! volume is never written.

use crate::adapters::SharedFlash;
use crate::domain::{FileListing, VolumeLayout, VolumeStats};
use crate::ports::filesystem::{FilesystemError, FilesystemPort};
use littlefs2::consts::{U1, U256};
use littlefs2::driver::Storage;
use littlefs2::fs::Filesystem;
use littlefs2::io::{Error as LfsError, Result as LfsResult};
use littlefs2::path;

/// Volume location on the board
pub const LAYOUT: VolumeLayout = VolumeLayout::PICO_MICROPYTHON;

/// The flash window backing the volume
///
/// Program and erase are refused, so mounting and querying can never
/// modify the user's files.
pub struct FlashRegion<'a, const FLASH_SIZE: usize> {
    flash: &'a SharedFlash<FLASH_SIZE>,
}

impl<const FLASH_SIZE: usize> Storage for FlashRegion<'_, FLASH_SIZE> {
    const READ_SIZE: usize = 256;
    const WRITE_SIZE: usize = 256;
    const BLOCK_SIZE: usize = LAYOUT.block_size as usize;
    const BLOCK_COUNT: usize = LAYOUT.block_count as usize;
    const BLOCK_CYCLES: isize = 500;

    type CACHE_SIZE = U256;
    type LOOKAHEAD_SIZE = U1;

    fn read(&mut self, off: usize, buf: &mut [u8]) -> LfsResult<usize> {
        let offset = LAYOUT.offset + off as u32;
        self.flash
            .lock(|flash| flash.borrow_mut().blocking_read(offset, buf))
            .map_err(|_| LfsError::Io)?;
        Ok(buf.len())
    }

    fn write(&mut self, off: usize, _data: &[u8]) -> LfsResult<usize> {
        warn!("refused littlefs program at volume offset {}", off);
        Err(LfsError::Io)
    }

    fn erase(&mut self, off: usize, _len: usize) -> LfsResult<usize> {
        warn!("refused littlefs erase at volume offset {}", off);
        Err(LfsError::Io)
    }
}

/// Root filesystem on the on-board flash
///
/// The volume is mounted for each query and released again, so nothing
/// stays borrowed between readout steps. A volume that does not mount is
/// reported as [`FilesystemError::MountFailed`].
pub struct FlashVolume<'a, const FLASH_SIZE: usize> {
    storage: FlashRegion<'a, FLASH_SIZE>,
}

impl<'a, const FLASH_SIZE: usize> FlashVolume<'a, FLASH_SIZE> {
    pub fn new(flash: &'a SharedFlash<FLASH_SIZE>) -> Self {
        Self {
            storage: FlashRegion { flash },
        }
    }

    fn with_mounted<R>(
        &mut self,
        f: impl FnOnce(&Filesystem<'_, FlashRegion<'a, FLASH_SIZE>>) -> LfsResult<R>,
    ) -> Result<R, FilesystemError> {
        if !Filesystem::is_mountable(&mut self.storage) {
            return Err(FilesystemError::MountFailed);
        }
        Filesystem::mount_and_then(&mut self.storage, f).map_err(map_lfs_error)
    }
}

impl<'a, const FLASH_SIZE: usize> FilesystemPort for FlashVolume<'a, FLASH_SIZE> {
    fn stat(&mut self) -> Result<VolumeStats, FilesystemError> {
        self.with_mounted(|fs| {
            let free = fs.available_blocks()?;
            Ok(VolumeStats::new(
                LAYOUT.block_size,
                fs.total_blocks() as u32,
                free as u32,
            ))
        })
    }

    fn list_root(&mut self) -> Result<FileListing, FilesystemError> {
        self.with_mounted(|fs| {
            fs.read_dir_and_then(path!("/"), |dir| {
                let mut listing = FileListing::new();
                for entry in dir {
                    let entry = entry?;
                    let name = entry.file_name().as_str();
                    if name == "." || name == ".." {
                        continue;
                    }
                    listing.push(name);
                }
                Ok(listing)
            })
        })
    }
}

fn map_lfs_error(e: LfsError) -> FilesystemError {
    match e {
        LfsError::Io => FilesystemError::FlashError,
        LfsError::Corruption => FilesystemError::Corrupted,
        _ => FilesystemError::MountFailed,
    }
}
