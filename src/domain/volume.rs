//! Flash filesystem readouts

use heapless::{String, Vec};

/// Longest file name kept in a listing
pub const MAX_FILE_NAME_LEN: usize = 32;

/// Most file names kept in a listing
pub const MAX_LISTED_FILES: usize = 32;

/// A file name at the filesystem root
pub type FileName = String<MAX_FILE_NAME_LEN>;

/// Where a block volume sits in the on-board flash
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VolumeLayout {
    /// Byte offset from the start of flash
    pub offset: u32,
    /// Bytes per block (one erase sector)
    pub block_size: u32,
    /// Blocks in the volume
    pub block_count: u32,
}

impl VolumeLayout {
    /// The MicroPython rp2 layout for a 2 MiB Pico: the last 1408 KiB of
    /// flash in 4 KiB blocks
    pub const PICO_MICROPYTHON: Self = Self {
        offset: 0x000A_0000,
        block_size: 4096,
        block_count: 352,
    };

    /// Volume size in bytes
    pub const fn size(&self) -> u32 {
        self.block_size * self.block_count
    }

    /// First byte past the volume
    pub const fn end(&self) -> u32 {
        self.offset + self.size()
    }
}

/// Filesystem volume statistics (the statvfs subset the readout uses)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VolumeStats {
    /// Bytes per block
    pub block_size: u32,
    /// Blocks in the volume
    pub blocks: u32,
    /// Blocks not in use
    pub free_blocks: u32,
}

impl VolumeStats {
    pub const fn new(block_size: u32, blocks: u32, free_blocks: u32) -> Self {
        Self {
            block_size,
            blocks,
            free_blocks,
        }
    }

    /// Volume capacity in bytes
    pub const fn total_bytes(&self) -> u64 {
        self.blocks as u64 * self.block_size as u64
    }

    /// Unused space in bytes
    pub const fn free_bytes(&self) -> u64 {
        self.free_blocks as u64 * self.block_size as u64
    }
}

/// Names of the files at the filesystem root
///
/// Bounded; `truncated` is set when the directory held more entries (or
/// longer names) than fit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileListing {
    pub names: Vec<FileName, MAX_LISTED_FILES>,
    pub truncated: bool,
}

impl FileListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name, marking the listing truncated if it does not fit
    pub fn push(&mut self, name: &str) {
        let Ok(name) = FileName::try_from(name) else {
            self.truncated = true;
            return;
        };
        if self.names.push(name).is_err() {
            self.truncated = true;
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_bytes() {
        let stats = VolumeStats::new(4096, 256, 250);
        assert_eq!(stats.total_bytes(), 1_048_576);
        assert_eq!(stats.free_bytes(), 1_024_000);
    }

    #[test]
    fn test_volume_bytes_do_not_overflow() {
        let stats = VolumeStats::new(u32::MAX, u32::MAX, u32::MAX);
        let expected = u32::MAX as u64 * u32::MAX as u64;
        assert_eq!(stats.total_bytes(), expected);
        assert_eq!(stats.free_bytes(), expected);

        let empty = VolumeStats::new(4096, 0, 0);
        assert_eq!(empty.total_bytes(), 0);
        assert_eq!(empty.free_bytes(), 0);
    }

    #[test]
    fn test_pico_layout_fills_flash_tail() {
        let layout = VolumeLayout::PICO_MICROPYTHON;
        assert_eq!(layout.size(), 1408 * 1024);
        assert_eq!(layout.end(), 2 * 1024 * 1024);
        assert_eq!(layout.offset % layout.block_size, 0);
    }

    #[test]
    fn test_firmware_image_ends_before_volume() {
        let flash = include_str!("../../memory.x")
            .lines()
            .find(|l| l.trim_start().starts_with("FLASH"))
            .unwrap();
        assert!(flash.contains("ORIGIN = 0x10000100"));
        assert!(flash.contains("LENGTH = 640K - 0x100"));
        assert_eq!(VolumeLayout::PICO_MICROPYTHON.offset, 640 * 1024);
    }

    #[test]
    fn test_listing_push() {
        let mut listing = FileListing::new();
        assert!(listing.is_empty());

        listing.push("boot.txt");
        listing.push("readings.csv");
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.iter().collect::<std::vec::Vec<_>>(), ["boot.txt", "readings.csv"]);
        assert!(!listing.truncated);
    }

    #[test]
    fn test_listing_truncates() {
        let mut listing = FileListing::new();
        for _ in 0..MAX_LISTED_FILES + 3 {
            listing.push("f");
        }
        assert_eq!(listing.len(), MAX_LISTED_FILES);
        assert!(listing.truncated);

        let mut long = FileListing::new();
        long.push("a-file-name-that-is-much-longer-than-thirty-two-bytes.txt");
        assert!(long.is_empty());
        assert!(long.truncated);
    }
}
