//! Warning taxonomy for unsupported layout features
//!
//! The flex engine is total: every input produces a layout, and conditions
//! it cannot honor degrade to a conservative result instead of failing.
//! The variants here describe the conditions that are worth telling the
//! host about; the engine logs them through the `log` facade and recovers.

use crate::style::types::Overflow;
use thiserror::Error;

/// A recognized but unimplemented layout feature.
///
/// Emitting one of these never aborts layout. The engine picks the
/// documented fallback and keeps going:
///
/// - [`UnsupportedFeature::ScrollingOverflow`]: the container is laid out
///   as empty (zero size, zero overflow).
/// - [`UnsupportedFeature::BaselineAlignment`]: the item is aligned as if
///   `align-self: flex-start`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedFeature {
  /// The container asked for a scrolling overflow mode (`scroll` or
  /// `auto`). Scrollable flex containers need scrollbar reservation and
  /// two-pass sizing, neither of which is implemented.
  #[error(
    "scrolling flex containers are not implemented (overflow: {overflow_x:?} {overflow_y:?}); returning an empty layout"
  )]
  ScrollingOverflow {
    overflow_x: Overflow,
    overflow_y: Overflow,
  },

  /// An item asked for `align-self: baseline`, which requires first-line
  /// baseline metrics from the child's formatting.
  #[error("flexbox baseline alignment is not implemented; falling back to flex-start")]
  BaselineAlignment,
}
