//! Filesystem port - statistics and root listing of the flash volume
//!
//! This trait lets the readout query the filesystem without knowing the
//! on-flash format or the flash driver behind it.

use crate::domain::{FileListing, VolumeStats};
use core::fmt;

/// Error type for filesystem operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilesystemError {
    /// The volume could not be mounted
    MountFailed,
    /// Flash operation failed
    FlashError,
    /// On-flash metadata is inconsistent
    Corrupted,
    /// Reading the root directory failed
    ReadDirFailed,
}

impl fmt::Display for FilesystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilesystemError::MountFailed => f.write_str("filesystem mount failed"),
            FilesystemError::FlashError => f.write_str("flash operation failed"),
            FilesystemError::Corrupted => f.write_str("filesystem corrupted"),
            FilesystemError::ReadDirFailed => f.write_str("reading root directory failed"),
        }
    }
}

/// Port for the flash filesystem
///
/// # Example Implementation
///
/// ```ignore
/// struct FlashVolume<'a> {
///     storage: FlashRegion<'a>,
/// }
///
/// impl FilesystemPort for FlashVolume<'_> {
///     fn stat(&mut self) -> Result<VolumeStats, FilesystemError> {
///         Filesystem::mount_and_then(&mut self.storage, |fs| {
///             Ok(VolumeStats::new(4096, fs.total_blocks() as u32, fs.available_blocks()? as u32))
///         })
///         .map_err(|_| FilesystemError::MountFailed)
///     }
/// }
/// ```
pub trait FilesystemPort {
    /// Volume statistics of the root filesystem
    fn stat(&mut self) -> Result<VolumeStats, FilesystemError>;

    /// Names of the entries in the root directory
    ///
    /// `.` and `..` are not included.
    fn list_root(&mut self) -> Result<FileListing, FilesystemError>;
}
