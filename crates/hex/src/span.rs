//! Checked sub-range views over caller-owned sequences.

use crate::error::{CodecError, Result};
use crate::utils::ensure;

fn checked_end(offset: usize, len: usize, available: usize) -> Result<usize> {
    let end = offset.checked_add(len).ok_or_else(|| CodecError::span_out_of_range(offset, len, available))?;
    ensure!(end <= available, CodecError::span_out_of_range(offset, len, available));
    Ok(end)
}

/// Returns `seq[offset..offset + len]`, or a range error when it does not fit.
pub fn span<T>(seq: &[T], offset: usize, len: usize) -> Result<&[T]> {
    let end = checked_end(offset, len, seq.len())?;
    Ok(&seq[offset..end])
}

/// Mutable counterpart of [`span`].
pub fn span_mut<T>(seq: &mut [T], offset: usize, len: usize) -> Result<&mut [T]> {
    let end = checked_end(offset, len, seq.len())?;
    Ok(&mut seq[offset..end])
}

/// Tail of a destination starting at `offset`, sized for exactly `needed` units.
///
/// An offset past the end is a span error; a tail shorter than `needed` is a
/// capacity error. Both are raised before anything is written.
pub(crate) fn destination<T>(dst: &mut [T], offset: usize, needed: usize) -> Result<&mut [T]> {
    ensure!(offset <= dst.len(), CodecError::span_out_of_range(offset, 0, dst.len()));
    let available = dst.len() - offset;
    ensure!(needed <= available, CodecError::insufficient_capacity(needed, available));
    Ok(&mut dst[offset..offset + needed])
}
