//! Per-axis edge and size resolution
//!
//! Flex treats the two physical axes symmetrically, so the style
//! properties of an item are first regrouped into a per-axis view
//! ([`AxisComputedSize`]) and then resolved into the numeric form the
//! algorithm works with ([`AxisSizing`]). Resolution handles percentage
//! bases, `box-sizing` correction of min/max bounds, and the margin swap
//! needed when the axis runs reversed.

use crate::style::types::BoxSizing;
use crate::style::values::Length;
use crate::style::ComputedStyle;

/// One axis of an element's computed box properties.
///
/// `margin_a`/`padding_a`/`border_a` are the leading (left or top) edge,
/// `*_b` the trailing edge. `None` margins are `auto`; a `None` size is
/// `auto`; a `None` max size is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisComputedSize {
  pub margin_a: Option<Length>,
  pub margin_b: Option<Length>,
  pub padding_a: Length,
  pub padding_b: Length,
  pub border_a: f32,
  pub border_b: f32,
  pub size: Option<Length>,
  pub min_size: Option<Length>,
  pub max_size: Option<Length>,
  pub box_sizing: BoxSizing,
}

impl AxisComputedSize {
  /// The horizontal-axis view: left edges are leading, right trailing.
  pub fn horizontal(style: &ComputedStyle) -> Self {
    Self {
      margin_a: style.margin_left,
      margin_b: style.margin_right,
      padding_a: style.padding_left,
      padding_b: style.padding_right,
      border_a: style.border_left_width.to_px(),
      border_b: style.border_right_width.to_px(),
      size: style.width,
      min_size: style.min_width,
      max_size: style.max_width,
      box_sizing: style.box_sizing,
    }
  }

  /// The vertical-axis view: top edges are leading, bottom trailing.
  pub fn vertical(style: &ComputedStyle) -> Self {
    Self {
      margin_a: style.margin_top,
      margin_b: style.margin_bottom,
      padding_a: style.padding_top,
      padding_b: style.padding_bottom,
      border_a: style.border_top_width.to_px(),
      border_b: style.border_bottom_width.to_px(),
      size: style.height,
      min_size: style.min_height,
      max_size: style.max_height,
      box_sizing: style.box_sizing,
    }
  }
}

/// Resolved per-axis sizing of a flex item.
///
/// All lengths are pixels. `min_size`/`max_size` bound the *inner* size;
/// `sum_edges` converts between inner and outer sizes. Auto margins carry
/// a numeric value of zero here and get their share of free space during
/// alignment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisSizing {
  pub auto_margin_a: bool,
  pub auto_margin_b: bool,
  pub auto_size: bool,
  pub margin_a: f32,
  pub margin_b: f32,
  pub sum_edges: f32,
  pub min_size: f32,
  pub max_size: f32,
}

impl AxisSizing {
  /// Resolves one axis of an item's computed sizes against `base_value`.
  ///
  /// Negative padding and border resolve to zero. An unconstrained max
  /// size resolves to `f32::MAX`. Under `box-sizing: border-box` the
  /// min/max bounds are converted to inner-size bounds by subtracting
  /// padding and border, floored at zero.
  ///
  /// `reverse` swaps the leading and trailing margins (values and auto
  /// flags): an axis laid out in reverse sees its edges mirrored, and
  /// swapping here keeps the rest of the algorithm order-agnostic.
  pub fn resolve(computed: &AxisComputedSize, base_value: f32, reverse: bool) -> Self {
    let margin_a = computed
      .margin_a
      .map_or(0.0, |margin| margin.resolve_against(base_value));
    let margin_b = computed
      .margin_b
      .map_or(0.0, |margin| margin.resolve_against(base_value));

    let padding_border_a =
      computed.padding_a.resolve_against(base_value).max(0.0) + computed.border_a.max(0.0);
    let padding_border_b =
      computed.padding_b.resolve_against(base_value).max(0.0) + computed.border_b.max(0.0);

    let padding_border = padding_border_a + padding_border_b;
    let margin = margin_a + margin_b;

    let mut sizing = AxisSizing {
      auto_margin_a: computed.margin_a.is_none(),
      auto_margin_b: computed.margin_b.is_none(),
      auto_size: computed.size.is_none(),
      margin_a,
      margin_b,
      sum_edges: padding_border + margin,
      min_size: computed
        .min_size
        .map_or(0.0, |min| min.resolve_against(base_value)),
      max_size: computed
        .max_size
        .map_or(f32::MAX, |max| max.resolve_against(base_value)),
    };

    if computed.box_sizing == BoxSizing::BorderBox {
      sizing.min_size = (sizing.min_size - padding_border).max(0.0);
      if sizing.max_size < f32::MAX {
        sizing.max_size = (sizing.max_size - padding_border).max(0.0);
      }
    }

    if reverse {
      std::mem::swap(&mut sizing.auto_margin_a, &mut sizing.auto_margin_b);
      std::mem::swap(&mut sizing.margin_a, &mut sizing.margin_b);
    }

    sizing
  }

  /// The padding + border share of `sum_edges`.
  pub fn padding_border(&self) -> f32 {
    self.sum_edges - (self.margin_a + self.margin_b)
  }
}
