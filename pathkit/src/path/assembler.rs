//! Append-only path assembler.
//!
//! `PathAssembler` builds an `OsString` out of platform code units with a
//! configurable growth factor. Every reservation goes through
//! `try_reserve_exact`, so running out of memory surfaces as
//! [`Error::Allocation`] instead of aborting the process.

use std::ffi::{OsStr, OsString};

use crate::error::{Error, Result};
use crate::path::sys::{self, Unit};

/// Initial capacity used when joining two paths.
pub const DEFAULT_JOIN_CAPACITY: usize = 256;

/// Initial capacity used when extracting a file name.
pub const DEFAULT_FILE_NAME_CAPACITY: usize = 64;

/// Capacity multiplier applied when the buffer runs out of room.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

/// A growable buffer of path code units.
///
/// The buffer is released on drop. [`PathAssembler::finish`] consumes the
/// assembler and hands its storage to the returned `OsString`; on unix no
/// bytes are copied.
///
/// # Examples
///
/// ```
/// use pathkit::path::PathAssembler;
/// use std::ffi::OsStr;
///
/// let mut assembler = PathAssembler::new(16, 1.5).unwrap();
/// assembler.push(OsStr::new("dir")).unwrap();
/// assembler.push_char('-').unwrap();
/// assembler.push(OsStr::new("sub")).unwrap();
/// assert_eq!(assembler.finish(), "dir-sub");
/// ```
#[derive(Debug)]
pub struct PathAssembler {
    units: Vec<Unit>,
    growth_factor: f64,
}

impl PathAssembler {
    /// Create an assembler with room for `capacity_hint` units.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `growth_factor` is not a finite number greater than 1.0 (`InvalidInput`)
    /// - The initial storage cannot be reserved (`Allocation`)
    pub fn new(capacity_hint: usize, growth_factor: f64) -> Result<Self> {
        if !growth_factor.is_finite() || growth_factor <= 1.0 {
            return Err(Error::InvalidInput {
                argument: "growth_factor",
                reason: format!("must be a finite number greater than 1.0, got {growth_factor}"),
            });
        }

        let mut units = Vec::new();
        units
            .try_reserve_exact(capacity_hint)
            .map_err(|source| Error::Allocation {
                requested: capacity_hint,
                source,
            })?;

        Ok(Self {
            units,
            growth_factor,
        })
    }

    /// Number of units currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether nothing has been appended since creation or the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of units the assembler can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.units.capacity()
    }

    /// The current content.
    #[must_use]
    pub fn as_units(&self) -> &[Unit] {
        &self.units
    }

    /// Append an OS string.
    ///
    /// # Errors
    ///
    /// Returns `Allocation` if the buffer cannot grow.
    pub fn push(&mut self, s: &OsStr) -> Result<()> {
        let units = sys::as_units(s);
        self.extend(&units)
    }

    /// Append a single character.
    ///
    /// # Errors
    ///
    /// Returns `Allocation` if the buffer cannot grow.
    pub fn push_char(&mut self, c: char) -> Result<()> {
        let mut scratch = [0; 4];
        let units = sys::encode_char(c, &mut scratch);
        self.extend(units)
    }

    /// Append a single code unit.
    ///
    /// # Errors
    ///
    /// Returns `Allocation` if the buffer cannot grow.
    pub fn push_unit(&mut self, unit: Unit) -> Result<()> {
        self.reserve(1)?;
        self.units.push(unit);
        Ok(())
    }

    /// Discard the content, keeping the capacity.
    pub fn reset(&mut self) {
        self.units.clear();
    }

    /// Consume the assembler and take ownership of its content.
    #[must_use]
    pub fn finish(self) -> OsString {
        sys::from_units(self.units)
    }

    fn extend(&mut self, units: &[Unit]) -> Result<()> {
        self.reserve(units.len())?;
        self.units.extend_from_slice(units);
        Ok(())
    }

    fn reserve(&mut self, additional: usize) -> Result<()> {
        let len = self.units.len();
        let capacity = self.units.capacity();
        let required = len.saturating_add(additional);
        if required <= capacity {
            return Ok(());
        }

        let grown = grown_capacity(capacity, self.growth_factor).max(required);
        log::trace!("growing path assembler from {capacity} to {grown} units");

        if grown > required && self.units.try_reserve_exact(grown - len).is_ok() {
            return Ok(());
        }

        // Growth by factor failed or was not larger; settle for the exact need.
        self.units
            .try_reserve_exact(required - len)
            .map_err(|source| Error::Allocation {
                requested: required,
                source,
            })
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn grown_capacity(capacity: usize, growth_factor: f64) -> usize {
    // Float-to-int casts saturate.
    (capacity as f64 * growth_factor).ceil() as usize
}
