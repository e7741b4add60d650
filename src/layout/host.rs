//! The host collaborator contract
//!
//! The flex engine does not own a document tree, a style system, or the
//! formatting of child subtrees; it drives all of those through the
//! [`LayoutHost`] trait. A host is typically a larger layout engine that
//! calls into flex for its flex containers and gets called back for
//! everything below them.
//!
//! # Contract
//!
//! Implementers must:
//!
//! 1. Hand out stable, copyable element handles; the engine only compares
//!    and passes them back.
//! 2. Answer every callback synchronously; nothing here may block or
//!    suspend.
//! 3. Not mutate the computed values of the container element while a
//!    `format` call that was given that element is on the stack.
//!    Re-entrant formatting of *other* subtrees is fine and expected;
//!    the engine formats children mid-layout.

use crate::geometry::{Point, Size};
use crate::style::ComputedStyle;

/// An element's content box as exchanged between the engine and the host.
///
/// `content_size` components may be negative, meaning the size in that
/// axis is unknown and must be derived from content ("intrinsic"). The
/// offset locates the content box within the element's border box and is
/// expected to be pre-snapped to the pixel grid by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
  content_offset: Point,
  content_size: Size,
}

impl ElementBox {
  pub const fn new(content_offset: Point, content_size: Size) -> Self {
    Self {
      content_offset,
      content_size,
    }
  }

  /// A box with the given content size and a zero content offset.
  pub const fn sized(content_size: Size) -> Self {
    Self::new(Point::ZERO, content_size)
  }

  /// Origin of the content box within the element's border box.
  pub fn content_offset(&self) -> Point {
    self.content_offset
  }

  /// Content size; negative components are unknown.
  pub fn content_size(&self) -> Size {
    self.content_size
  }

  /// Replaces the content size.
  pub fn set_content(&mut self, size: Size) {
    self.content_size = size;
  }
}

/// Callbacks the flex engine needs from its embedding layout engine.
///
/// The `Element` associated type is an opaque handle; `usize` indices,
/// arena ids, and `&`-free keys all work. Handles must stay valid for the
/// duration of one `format` call.
pub trait LayoutHost {
  type Element: Copy + PartialEq;

  /// Read-only computed style of an element.
  fn computed_values(&self, element: Self::Element) -> &ComputedStyle;

  /// Number of direct children of an element.
  fn child_count(&self, element: Self::Element) -> usize;

  /// Direct child of an element by index, in source order.
  fn child(&self, element: Self::Element, index: usize) -> Self::Element;

  /// Builds an element's box against a containing block: margins, padding,
  /// border, and a content size that is negative on axes where the size is
  /// intrinsic.
  ///
  /// `override_shrink_to_fit_width` substitutes the given value for the
  /// shrink-to-fit width the host would otherwise compute for an auto
  /// width; the engine passes `Some(0.0)` when it is about to assign the
  /// content size itself and the intrinsic width would be wasted work.
  fn build_box(
    &mut self,
    element: Self::Element,
    containing_block: Size,
    inline: bool,
    override_shrink_to_fit_width: Option<f32>,
  ) -> ElementBox;

  /// Fully lays out a child subtree.
  ///
  /// On entry `element_box` carries the content size the child must adopt
  /// (negative components mean "derive from content"). On return the host
  /// has written the used content size back into `element_box`. Returns
  /// the child's visible overflow size: the extent of its content from
  /// its border-box origin.
  fn format_element(
    &mut self,
    element: Self::Element,
    containing_block: Size,
    element_box: &mut ElementBox,
  ) -> Size;

  /// Intrinsic width the element would adopt given unbounded horizontal
  /// space, capped by the containing block.
  fn shrink_to_fit_width(&mut self, element: Self::Element, containing_block: Size) -> f32;

  /// Writes an element's final offset, relative to `anchor`'s border box.
  fn set_offset(&mut self, element: Self::Element, offset: Point, anchor: Self::Element);

  /// Snaps a one-dimensional extent to the pixel grid, preserving outer
  /// edges: after snapping, both `offset` and `offset + size` lie on pixel
  /// boundaries. The size may change by less than one pixel.
  ///
  /// The default rounds to the nearest device pixel at a 1:1 scale; hosts
  /// with a device pixel ratio override this.
  fn snap_to_pixel_grid(&self, offset: &mut f32, size: &mut f32) {
    let end = (*offset + *size).round();
    *offset = offset.round();
    *size = end - *offset;
  }

  /// Two-dimensional variant of [`LayoutHost::snap_to_pixel_grid`].
  fn snap_region_to_pixel_grid(&self, offset: &mut Point, size: &mut Size) {
    self.snap_to_pixel_grid(&mut offset.x, &mut size.width);
    self.snap_to_pixel_grid(&mut offset.y, &mut size.height);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Minimal host exercising only the provided snapping defaults.
  struct SnapOnlyHost;

  impl LayoutHost for SnapOnlyHost {
    type Element = usize;

    fn computed_values(&self, _element: usize) -> &ComputedStyle {
      unimplemented!("not needed for snapping tests")
    }
    fn child_count(&self, _element: usize) -> usize {
      0
    }
    fn child(&self, _element: usize, _index: usize) -> usize {
      unimplemented!("no children")
    }
    fn build_box(
      &mut self,
      _element: usize,
      _containing_block: Size,
      _inline: bool,
      _override_shrink_to_fit_width: Option<f32>,
    ) -> ElementBox {
      ElementBox::sized(Size::ZERO)
    }
    fn format_element(
      &mut self,
      _element: usize,
      _containing_block: Size,
      _element_box: &mut ElementBox,
    ) -> Size {
      Size::ZERO
    }
    fn shrink_to_fit_width(&mut self, _element: usize, _containing_block: Size) -> f32 {
      0.0
    }
    fn set_offset(&mut self, _element: usize, _offset: Point, _anchor: usize) {}
  }

  #[test]
  fn test_snap_preserves_outer_edges() {
    let host = SnapOnlyHost;
    let mut offset = 10.4;
    let mut size = 20.4;
    host.snap_to_pixel_grid(&mut offset, &mut size);
    assert_eq!(offset, 10.0);
    // Outer edge 30.8 rounds to 31, so the size absorbs the difference.
    assert_eq!(size, 21.0);
  }

  #[test]
  fn test_snap_changes_size_by_less_than_one_pixel() {
    let host = SnapOnlyHost;
    for (raw_offset, raw_size) in [(0.49, 9.49), (0.51, 9.51), (3.3, 0.2)] {
      let mut offset = raw_offset;
      let mut size = raw_size;
      host.snap_to_pixel_grid(&mut offset, &mut size);
      assert!((size - raw_size).abs() < 1.0);
      assert_eq!(offset, offset.round());
      assert_eq!(offset + size, (offset + size).round());
    }
  }

  #[test]
  fn test_snap_keeps_integral_unknown_sentinel() {
    let host = SnapOnlyHost;
    let mut offset = 10.0;
    let mut size = -1.0;
    host.snap_to_pixel_grid(&mut offset, &mut size);
    assert_eq!(offset, 10.0);
    assert_eq!(size, -1.0);
  }

  #[test]
  fn test_element_box_set_content() {
    let mut element_box = ElementBox::new(Point::new(2.0, 3.0), Size::new(-1.0, -1.0));
    assert_eq!(element_box.content_size(), Size::new(-1.0, -1.0));
    element_box.set_content(Size::new(100.0, 50.0));
    assert_eq!(element_box.content_size(), Size::new(100.0, 50.0));
    assert_eq!(element_box.content_offset(), Point::new(2.0, 3.0));
  }
}
