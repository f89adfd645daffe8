//! Recognition of the expected error conditions the logger may suppress.
//!
//! Matching walks the `source()` chain so wrapped errors are recognized the
//! same as bare ones. Messages are never compared.

use std::error::Error as StdError;
use std::io;

use crate::error::Sentinel;

fn chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

impl Sentinel {
    /// True when `err`, or any error in its source chain, is this condition.
    #[must_use]
    pub fn matches(self, err: &(dyn StdError + 'static)) -> bool {
        match self {
            Self::RecordNotFound => is_record_not_found(err),
            Self::Canceled => is_canceled(err),
        }
    }
}

/// True for [`Sentinel::RecordNotFound`] and diesel's `NotFound`.
#[must_use]
pub fn is_record_not_found(err: &(dyn StdError + 'static)) -> bool {
    chain(err).any(|e| {
        matches!(e.downcast_ref::<Sentinel>(), Some(Sentinel::RecordNotFound))
            || matches!(
                e.downcast_ref::<diesel::result::Error>(),
                Some(diesel::result::Error::NotFound)
            )
    })
}

/// True for [`Sentinel::Canceled`] and interrupted I/O.
#[must_use]
pub fn is_canceled(err: &(dyn StdError + 'static)) -> bool {
    chain(err).any(|e| {
        matches!(e.downcast_ref::<Sentinel>(), Some(Sentinel::Canceled))
            || e
                .downcast_ref::<io::Error>()
                .is_some_and(|io_err| io_err.kind() == io::ErrorKind::Interrupted)
    })
}
