use crate::geometry::{Point, Size};
use crate::style::types::{FlexDirection, FlexWrap};

/// Describes the logical axes of a flex container.
///
/// The flex algorithm operates in a (main, cross) coordinate system derived
/// from `flex-direction` and `flex-wrap`. This helper owns the mapping in
/// both directions so the pipeline never branches on physical axes; the
/// physical (x, y) frame reappears only when offsets and sizes are handed
/// back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexAxes {
  main_horizontal: bool,
  direction_reverse: bool,
  wrap_reverse: bool,
  single_line: bool,
}

impl FlexAxes {
  pub fn new(
    main_horizontal: bool,
    direction_reverse: bool,
    wrap_reverse: bool,
    single_line: bool,
  ) -> Self {
    Self {
      main_horizontal,
      direction_reverse,
      wrap_reverse,
      single_line,
    }
  }

  pub fn from_style(direction: FlexDirection, wrap: FlexWrap) -> Self {
    let main_horizontal = matches!(direction, FlexDirection::Row | FlexDirection::RowReverse);
    let direction_reverse = matches!(
      direction,
      FlexDirection::RowReverse | FlexDirection::ColumnReverse
    );
    let wrap_reverse = wrap == FlexWrap::WrapReverse;
    let single_line = wrap == FlexWrap::Nowrap;
    Self {
      main_horizontal,
      direction_reverse,
      wrap_reverse,
      single_line,
    }
  }

  /// Whether the main axis runs along physical X
  pub fn main_is_horizontal(&self) -> bool {
    self.main_horizontal
  }

  /// Whether items run against the physical direction of the main axis
  pub fn direction_reverse(&self) -> bool {
    self.direction_reverse
  }

  /// Whether lines stack against the physical direction of the cross axis
  pub fn wrap_reverse(&self) -> bool {
    self.wrap_reverse
  }

  /// Whether all items stay on a single line (`flex-wrap: nowrap`)
  pub fn single_line(&self) -> bool {
    self.single_line
  }

  /// Projects a physical size onto the main axis.
  pub fn main(&self, size: Size) -> f32 {
    if self.main_horizontal {
      size.width
    } else {
      size.height
    }
  }

  /// Projects a physical size onto the cross axis.
  pub fn cross(&self, size: Size) -> f32 {
    if self.main_horizontal {
      size.height
    } else {
      size.width
    }
  }

  /// Builds a physical size from logical (main, cross) extents.
  pub fn size(&self, main: f32, cross: f32) -> Size {
    if self.main_horizontal {
      Size::new(main, cross)
    } else {
      Size::new(cross, main)
    }
  }

  /// Builds a physical point from logical (main, cross) offsets.
  pub fn point(&self, main: f32, cross: f32) -> Point {
    if self.main_horizontal {
      Point::new(main, cross)
    } else {
      Point::new(cross, main)
    }
  }
}
