//! Utility macros used internally by the codecs.

/// Returns early with an error if a condition is not met.
///
/// Like `assert!`, but returns `Err($error)` instead of panicking. The codecs
/// use it for bounds and capacity checks that must fail before any output is
/// written.
///
/// ```ignore
/// ensure!(needed <= available, CodecError::insufficient_capacity(needed, available));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
