//! Style type definitions
//!
//! Enum types for the computed style properties layout looks at. Each type
//! carries exactly the value set the engine recognizes; values a host's
//! style system supports beyond these must be mapped before layout.

use crate::style::values::Length;

/// Outer display type
///
/// CSS: `display`
/// Reference: CSS Display Module Level 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
  None,
  Block,
  Flex,
}

impl Default for Display {
  fn default() -> Self {
    Display::Block
  }
}

/// Positioning scheme
///
/// CSS: `position`
/// Reference: CSS 2.1 Section 9.3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
  Static,
  Relative,
  Absolute,
  Fixed,
}

impl Default for Position {
  fn default() -> Self {
    Position::Static
  }
}

/// Overflow behavior for content that exceeds container bounds
///
/// CSS: `overflow-x`, `overflow-y`
/// Reference: CSS Overflow Module Level 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
  Visible,
  Hidden,
  Scroll,
  Auto,
}

impl Default for Overflow {
  fn default() -> Self {
    Overflow::Visible
  }
}

/// Determines which box the width/height properties apply to.
///
/// CSS: `box-sizing`
/// Reference: CSS Box Sizing Module Level 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxSizing {
  ContentBox,
  BorderBox,
}

impl Default for BoxSizing {
  fn default() -> Self {
    BoxSizing::ContentBox
  }
}

/// Flex container main axis direction
///
/// CSS: `flex-direction`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
  Row,
  RowReverse,
  Column,
  ColumnReverse,
}

impl Default for FlexDirection {
  fn default() -> Self {
    FlexDirection::Row
  }
}

/// Flex item wrapping behavior
///
/// CSS: `flex-wrap`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexWrap {
  Nowrap,
  Wrap,
  WrapReverse,
}

impl Default for FlexWrap {
  fn default() -> Self {
    FlexWrap::Nowrap
  }
}

/// Main axis alignment for flex items
///
/// CSS: `justify-content`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JustifyContent {
  FlexStart,
  FlexEnd,
  Center,
  SpaceBetween,
  SpaceAround,
}

impl Default for JustifyContent {
  fn default() -> Self {
    JustifyContent::FlexStart
  }
}

/// Cross axis alignment default for a container's items
///
/// CSS: `align-items`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignItems {
  FlexStart,
  FlexEnd,
  Center,
  Baseline,
  Stretch,
}

impl Default for AlignItems {
  fn default() -> Self {
    AlignItems::Stretch
  }
}

/// Cross axis alignment override for a single flex item
///
/// CSS: `align-self`
/// Reference: CSS Flexible Box Layout Module Level 1
///
/// `Auto` defers to the container's `align-items`; item construction
/// substitutes it via [`AlignSelf::from`], so alignment code downstream
/// never observes `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignSelf {
  Auto,
  FlexStart,
  FlexEnd,
  Center,
  Baseline,
  Stretch,
}

impl Default for AlignSelf {
  fn default() -> Self {
    AlignSelf::Auto
  }
}

impl From<AlignItems> for AlignSelf {
  fn from(align_items: AlignItems) -> Self {
    match align_items {
      AlignItems::FlexStart => AlignSelf::FlexStart,
      AlignItems::FlexEnd => AlignSelf::FlexEnd,
      AlignItems::Center => AlignSelf::Center,
      AlignItems::Baseline => AlignSelf::Baseline,
      AlignItems::Stretch => AlignSelf::Stretch,
    }
  }
}

/// Multi-line cross axis alignment
///
/// CSS: `align-content`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignContent {
  FlexStart,
  FlexEnd,
  Center,
  SpaceBetween,
  SpaceAround,
  Stretch,
}

impl Default for AlignContent {
  fn default() -> Self {
    AlignContent::Stretch
  }
}

/// Flex item initial main size
///
/// CSS: `flex-basis`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlexBasis {
  Auto,
  Length(Length),
}

impl Default for FlexBasis {
  fn default() -> Self {
    FlexBasis::Auto
  }
}
