//! Shared layout utilities
//!
//! Contains common numeric helpers used across the layout modules.

/// Clamps `value` into `[min, max]`, letting the lower bound win when the
/// bounds cross.
///
/// CSS sizing gives `min-*` priority over `max-*` (CSS Box Sizing Level 3
/// Section 5.2), and `f32::clamp` panics on a crossed range, so layout
/// uses this instead.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
  value.min(max).max(min)
}
