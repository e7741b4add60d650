//! Flexbox formatting context
//!
//! Implements the CSS Flexible Box Layout Module Level 1 algorithm
//! directly: line collection, iterative flexible-length resolution under
//! min/max violations, cross sizing, and main/cross alignment, with
//! reversible axes and pixel-grid snapping of outer edges.
//!
//! # Design
//!
//! A [`FlexFormattingContext::format`] call builds transient per-call
//! state (items grouped into lines), runs the pipeline over it in logical
//! (main, cross) coordinates, and publishes results through the
//! [`LayoutHost`]: each in-flow child is formatted at its used size and
//! offset, and the container's resulting content size and overflow extent
//! are returned. Nothing persists between calls.
//!
//! Layout is total: unsupported inputs degrade per the taxonomy in
//! [`crate::error`] instead of failing.
//!
//! # References
//!
//! - CSS Flexible Box Layout Module Level 1: <https://www.w3.org/TR/css-flexbox-1/>
//! - Flexible length resolution: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use crate::error::UnsupportedFeature;
use crate::geometry::{Point, Size};
use crate::layout::axis::FlexAxes;
use crate::layout::edges::{AxisComputedSize, AxisSizing};
use crate::layout::host::{ElementBox, LayoutHost};
use crate::layout::utils::clamp;
use crate::style::types::{
  AlignContent, AlignSelf, BoxSizing, Display, FlexBasis, JustifyContent, Overflow, Position,
};
use crate::style::ComputedStyle;
use log::warn;

/// Which bound a proposed main size ran into during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
  None,
  Min,
  Max,
}

/// One in-flow child of the container, carried through the pipeline.
///
/// Sizes labeled *outer* include `sum_edges` (margin + padding + border);
/// *inner* sizes exclude it.
#[derive(Debug, Clone)]
struct FlexItem<E> {
  element: E,

  // Filled during the build step.
  main: AxisSizing,
  cross: AxisSizing,
  flex_shrink_factor: f32,
  flex_grow_factor: f32,
  /// Never `Auto` here; the build step substitutes the container's
  /// `align-items`.
  align_self: AlignSelf,

  inner_flex_base_size: f32,
  /// Outer flex base size.
  flex_base_size: f32,
  /// Outer flex base size clamped by the item's min/max bounds.
  hypothetical_main_size: f32,

  // Flexible length resolution.
  frozen: bool,
  violation: Violation,
  /// Outer size being negotiated by the resolver.
  target_main_size: f32,
  /// Outer size, excluding any auto-margin shares.
  used_main_size: f32,
  main_auto_margin_size_a: f32,
  main_auto_margin_size_b: f32,
  main_offset: f32,

  // Cross sizing and alignment.
  hypothetical_cross_size: f32,
  used_cross_size: f32,
  /// Offset within the item's line.
  cross_offset: f32,
}

/// A maximal run of items placed along the main axis within the wrap
/// limit.
#[derive(Debug, Clone)]
struct FlexLine<E> {
  items: Vec<FlexItem<E>>,
  accumulated_hypothetical_main_size: f32,
  cross_size: f32,
  cross_spacing_a: f32,
  cross_spacing_b: f32,
  cross_offset: f32,
}

impl<E> FlexLine<E> {
  fn new(items: Vec<FlexItem<E>>) -> Self {
    Self {
      items,
      accumulated_hypothetical_main_size: 0.0,
      cross_size: 0.0,
      cross_spacing_a: 0.0,
      cross_spacing_b: 0.0,
      cross_offset: 0.0,
    }
  }
}

/// The flex container layout algorithm.
///
/// Stateless; all per-call state lives on the stack of
/// [`FlexFormattingContext::format`].
#[derive(Debug, Default)]
pub struct FlexFormattingContext;

impl FlexFormattingContext {
  pub fn new() -> Self {
    Self
  }

  /// Lays out a flex container.
  ///
  /// `element_box` is the container's content box: its size may be
  /// negative on either axis to signal unknown/infinite space. On return
  /// its content size is set to the resulting content size. `min_size`
  /// and `max_size` clamp the container's own content size (pass
  /// `f32::MAX` components for unconstrained axes); `containing_block`
  /// supplies the percentage base for axes with unknown available space.
  ///
  /// Side effect: every laid-out child has been formatted at its used
  /// size and had its offset set relative to `element`.
  ///
  /// Returns the visible overflow extent: the maximum reach of the
  /// children's overflow within the container's content box.
  ///
  /// Containers with a scrolling overflow mode are not supported; they
  /// log a warning and come back empty, leaving `element_box` untouched.
  pub fn format<H: LayoutHost>(
    &self,
    host: &mut H,
    element_box: &mut ElementBox,
    min_size: Size,
    max_size: Size,
    containing_block: Size,
    element: H::Element,
  ) -> Size {
    let computed = host.computed_values(element).clone();

    let overflow_supported =
      |overflow: Overflow| matches!(overflow, Overflow::Visible | Overflow::Hidden);
    if !overflow_supported(computed.overflow_x) || !overflow_supported(computed.overflow_y) {
      warn!(
        "{}",
        UnsupportedFeature::ScrollingOverflow {
          overflow_x: computed.overflow_x,
          overflow_y: computed.overflow_y,
        }
      );
      return Size::ZERO;
    }

    let mut content_offset = element_box.content_offset();
    let mut available_content_size = element_box.content_size(); // May be negative for infinite space

    // Children resolve percentages against the available size where it is
    // known; an unknown height falls back to the caller's containing
    // block.
    let mut content_containing_block = available_content_size;
    if content_containing_block.height < 0.0 {
      content_containing_block.height = containing_block.height;
    }

    host.snap_region_to_pixel_grid(&mut content_offset, &mut available_content_size);

    // TODO: feed the resolved gaps into line accumulation and main/cross
    // offsets; they are collected here but not yet applied.
    let gap = Size::new(
      computed.column_gap.resolve_against(available_content_size.width),
      computed.row_gap.resolve_against(available_content_size.height),
    );

    let axes = FlexAxes::from_style(computed.flex_direction, computed.flex_wrap);

    let mut layout = FlexLayout {
      host,
      element,
      computed,
      axes,
      available_content_size,
      containing_block: content_containing_block,
      content_offset,
      min_size,
      max_size,
      gap,
      resulting_content_size: Size::ZERO,
      overflow_size: Size::ZERO,
    };

    layout.run();

    element_box.set_content(layout.resulting_content_size);
    layout.overflow_size
  }
}

/// Per-call layout state for one container.
struct FlexLayout<'a, H: LayoutHost> {
  host: &'a mut H,
  element: H::Element,
  computed: ComputedStyle,
  axes: FlexAxes,
  available_content_size: Size,
  containing_block: Size,
  content_offset: Point,
  min_size: Size,
  max_size: Size,
  #[allow(dead_code)]
  gap: Size,
  resulting_content_size: Size,
  overflow_size: Size,
}

impl<'a, H: LayoutHost> FlexLayout<'a, H> {
  fn run(&mut self) {
    let main_available_size = self.axes.main(self.available_content_size);
    let cross_available_size = self.axes.cross(self.available_content_size);

    let main_min_size = self.axes.main(self.min_size);
    let main_max_size = self.axes.main(self.max_size);
    let cross_min_size = self.axes.cross(self.min_size);
    let cross_max_size = self.axes.cross(self.max_size);

    // For the purpose of placing items, infinite space acts as a very
    // large wrap limit.
    let main_wrap_size = clamp(
      if main_available_size < 0.0 {
        f32::MAX
      } else {
        main_available_size
      },
      main_min_size,
      main_max_size,
    );

    // For the purpose of resolving lengths, infinite sizes become zero.
    let main_base_value = main_available_size.max(0.0);
    let cross_base_value = cross_available_size.max(0.0);

    let items = self.build_items(main_base_value, cross_base_value);
    if items.is_empty() {
      return;
    }

    let mut lines = self.collect_lines(items, main_wrap_size);

    // With infinite available main size, the container's used main size
    // becomes the accumulated outer size of the widest line.
    let used_main_size = if main_available_size >= 0.0 {
      main_available_size
    } else {
      lines
        .iter()
        .map(|line| line.accumulated_hypothetical_main_size)
        .fold(f32::MIN, f32::max)
    };

    for line in &mut lines {
      Self::resolve_flexible_lengths(line, used_main_size);
    }

    // Main alignment runs before cross sizing: pixel snapping can nudge
    // the used main sizes, and cross sizing reads them.
    for line in &mut lines {
      self.align_main_axis(line, used_main_size);
    }

    self.determine_hypothetical_cross_sizes(&mut lines);
    self.determine_line_cross_sizes(
      &mut lines,
      cross_available_size,
      cross_min_size,
      cross_max_size,
    );
    self.determine_used_cross_sizes(&mut lines);

    for line in &mut lines {
      self.align_cross_axis(line);
    }

    let used_cross_size = self.pack_lines(&mut lines, cross_available_size);

    self.format_items(&lines);

    self.resulting_content_size = self.axes.size(used_main_size, used_cross_size);
  }

  /// Builds one `FlexItem` per in-flow child, with resolved edge sizing,
  /// flex base size, and hypothetical main size.
  fn build_items(&mut self, main_base_value: f32, cross_base_value: f32) -> Vec<FlexItem<H::Element>> {
    let mut items = Vec::new();

    let child_count = self.host.child_count(self.element);
    for index in 0..child_count {
      let child = self.host.child(self.element, index);
      let child_computed = self.host.computed_values(child).clone();

      if child_computed.display == Display::None {
        continue;
      }
      if matches!(child_computed.position, Position::Absolute | Position::Fixed) {
        // Absolutely positioned boxes are not flex items.
        continue;
      }

      let (computed_main_size, computed_cross_size) = if self.axes.main_is_horizontal() {
        (
          AxisComputedSize::horizontal(&child_computed),
          AxisComputedSize::vertical(&child_computed),
        )
      } else {
        (
          AxisComputedSize::vertical(&child_computed),
          AxisComputedSize::horizontal(&child_computed),
        )
      };

      let main = AxisSizing::resolve(
        &computed_main_size,
        main_base_value,
        self.axes.direction_reverse(),
      );
      let cross = AxisSizing::resolve(
        &computed_cross_size,
        cross_base_value,
        self.axes.wrap_reverse(),
      );

      // Substitute the container's align-items for an auto align-self.
      let align_self = match child_computed.align_self {
        AlignSelf::Auto => AlignSelf::from(self.computed.align_items),
        other => other,
      };

      let sum_padding_border = main.padding_border();

      // The flex base size may come out negative under border-box sizing.
      let inner_flex_base_size = match child_computed.flex_basis {
        FlexBasis::Length(basis) => {
          let mut size = basis.resolve_against(main_base_value);
          if child_computed.box_sizing == BoxSizing::BorderBox {
            size -= sum_padding_border;
          }
          size
        }
        FlexBasis::Auto => {
          if let Some(main_size) = computed_main_size.size {
            let mut size = main_size.resolve_against(main_base_value);
            if child_computed.box_sizing == BoxSizing::BorderBox {
              size -= sum_padding_border;
            }
            size
          } else if self.axes.main_is_horizontal() {
            self
              .host
              .shrink_to_fit_width(child, self.containing_block)
          } else {
            // Vertical main axis with an auto size: take the built box's
            // content height if known, otherwise format the child once
            // for its intrinsic height.
            let mut child_box = self.host.build_box(child, self.containing_block, false, None);
            if child_box.content_size().height >= 0.0 {
              child_box.content_size().height
            } else {
              self
                .host
                .format_element(child, self.containing_block, &mut child_box);
              child_box.content_size().height
            }
          }
        }
      };

      let flex_base_size = inner_flex_base_size + main.sum_edges;
      let hypothetical_main_size =
        clamp(inner_flex_base_size, main.min_size, main.max_size) + main.sum_edges;

      items.push(FlexItem {
        element: child,
        main,
        cross,
        flex_shrink_factor: child_computed.flex_shrink,
        flex_grow_factor: child_computed.flex_grow,
        align_self,
        inner_flex_base_size,
        flex_base_size,
        hypothetical_main_size,
        frozen: false,
        violation: Violation::None,
        target_main_size: 0.0,
        used_main_size: 0.0,
        main_auto_margin_size_a: 0.0,
        main_auto_margin_size_b: 0.0,
        main_offset: 0.0,
        hypothetical_cross_size: 0.0,
        used_cross_size: 0.0,
        cross_offset: 0.0,
      });
    }

    items
  }

  /// Groups items into lines under the wrap limit and accumulates each
  /// line's hypothetical main size.
  fn collect_lines(
    &self,
    items: Vec<FlexItem<H::Element>>,
    main_wrap_size: f32,
  ) -> Vec<FlexLine<H::Element>> {
    let mut lines = Vec::new();

    if self.axes.single_line() {
      lines.push(FlexLine::new(items));
    } else {
      let mut cursor = 0.0;
      let mut line_items: Vec<FlexItem<H::Element>> = Vec::new();

      for item in items {
        cursor += item.hypothetical_main_size;

        if !line_items.is_empty() && cursor > main_wrap_size {
          // Break into a new line.
          lines.push(FlexLine::new(std::mem::take(&mut line_items)));
          cursor = item.hypothetical_main_size;
        }
        line_items.push(item);
      }

      if !line_items.is_empty() {
        lines.push(FlexLine::new(line_items));
      }
    }

    for line in &mut lines {
      line.accumulated_hypothetical_main_size = line
        .items
        .iter()
        .map(|item| item.hypothetical_main_size)
        .sum();
    }

    lines
  }

  /// Resolves the used main size of every item on a line: the iterative
  /// grow/shrink distribution with min/max violation freezing.
  ///
  /// Terminates in at most `items + 1` rounds: a round with a non-zero
  /// total violation freezes every item on the violating side (at least
  /// one), and a round with zero total violation freezes everything.
  fn resolve_flexible_lengths(line: &mut FlexLine<H::Element>, used_main_size: f32) {
    let available_flex_space = used_main_size - line.accumulated_hypothetical_main_size; // Possibly negative
    let flex_mode_grow = available_flex_space > 0.0;

    let flex_factor = |item: &FlexItem<H::Element>| {
      if flex_mode_grow {
        item.flex_grow_factor
      } else {
        item.flex_shrink_factor
      }
    };

    // Initialize targets and freeze the inflexible items outright.
    for item in &mut line.items {
      item.target_main_size = item.flex_base_size;

      if flex_factor(item) == 0.0
        || (flex_mode_grow && item.flex_base_size > item.hypothetical_main_size)
        || (!flex_mode_grow && item.flex_base_size < item.hypothetical_main_size)
      {
        item.frozen = true;
        item.target_main_size = item.hypothetical_main_size;
      }
    }

    let remaining_free_space = |items: &[FlexItem<H::Element>]| {
      used_main_size
        - items
          .iter()
          .map(|item| {
            if item.frozen {
              item.target_main_size
            } else {
              item.flex_base_size
            }
          })
          .sum::<f32>()
    };

    let initial_free_space = remaining_free_space(&line.items);

    while line.items.iter().any(|item| !item.frozen) {
      let mut remaining = remaining_free_space(&line.items);

      let flex_factor_sum: f32 = line
        .items
        .iter()
        .filter(|item| !item.frozen)
        .map(|item| flex_factor(item))
        .sum();

      if flex_factor_sum < 1.0 {
        let scaled_initial_free_space = initial_free_space * flex_factor_sum;
        if scaled_initial_free_space.abs() < remaining.abs() {
          remaining = scaled_initial_free_space;
        }
      }

      if remaining != 0.0 {
        if flex_mode_grow {
          for item in &mut line.items {
            if !item.frozen {
              let distribute_ratio = item.flex_grow_factor / flex_factor_sum;
              item.target_main_size = item.flex_base_size + distribute_ratio * remaining;
            }
          }
        } else {
          // Shrink proportionally to the scaled shrink factor so larger
          // items give up more space.
          let scaled_shrink_factor_sum: f32 = line
            .items
            .iter()
            .filter(|item| !item.frozen)
            .map(|item| item.flex_shrink_factor * item.inner_flex_base_size)
            .sum();

          for item in &mut line.items {
            if !item.frozen {
              let scaled_shrink_factor = item.flex_shrink_factor * item.inner_flex_base_size;
              let distribute_ratio = scaled_shrink_factor / scaled_shrink_factor_sum;
              item.target_main_size = item.flex_base_size - distribute_ratio * remaining.abs();
            }
          }
        }
      }

      // Clamp targets into their min/max bounds and record violations.
      let mut total_violation = 0.0;
      for item in &mut line.items {
        if !item.frozen {
          let inner_target_main_size = (item.target_main_size - item.main.sum_edges).max(0.0);
          let clamped_target_main_size =
            clamp(inner_target_main_size, item.main.min_size, item.main.max_size)
              + item.main.sum_edges;

          let violation_diff = clamped_target_main_size - item.target_main_size;
          item.violation = if violation_diff > 0.0 {
            Violation::Min
          } else if violation_diff < 0.0 {
            Violation::Max
          } else {
            Violation::None
          };
          item.target_main_size = clamped_target_main_size;

          total_violation += violation_diff;
        }
      }

      for item in &mut line.items {
        if total_violation > 0.0 {
          item.frozen |= item.violation == Violation::Min;
        } else if total_violation < 0.0 {
          item.frozen |= item.violation == Violation::Max;
        } else {
          item.frozen = true;
        }
      }
    }

    for item in &mut line.items {
      item.used_main_size = item.target_main_size;
    }
  }

  /// Distributes a line's leftover main space to auto margins or per
  /// `justify-content`, then assigns main offsets and snaps outer edges.
  fn align_main_axis(&mut self, line: &mut FlexLine<H::Element>, used_main_size: f32) {
    let remaining_free_space = used_main_size
      - line
        .items
        .iter()
        .map(|item| item.used_main_size)
        .sum::<f32>();

    if remaining_free_space > 0.0 {
      let num_auto_margins: usize = line
        .items
        .iter()
        .map(|item| usize::from(item.main.auto_margin_a) + usize::from(item.main.auto_margin_b))
        .sum();

      if num_auto_margins > 0 {
        // Auto margins swallow all the remaining space, equally.
        let space_per_auto_margin = remaining_free_space / num_auto_margins as f32;
        for item in &mut line.items {
          if item.main.auto_margin_a {
            item.main_auto_margin_size_a = space_per_auto_margin;
          }
          if item.main.auto_margin_b {
            item.main_auto_margin_size_b = space_per_auto_margin;
          }
        }
      } else {
        let num_items = line.items.len();
        let last = num_items - 1;

        match self.computed.justify_content {
          JustifyContent::SpaceBetween if num_items > 1 => {
            let space_per_edge = remaining_free_space / (2 * num_items - 2) as f32;
            for (index, item) in line.items.iter_mut().enumerate() {
              if index > 0 {
                item.main_auto_margin_size_a = space_per_edge;
              }
              if index < last {
                item.main_auto_margin_size_b = space_per_edge;
              }
            }
          }
          // A single item has no inner edges; space-between packs it at
          // the start.
          JustifyContent::SpaceBetween | JustifyContent::FlexStart => {
            line.items[last].main_auto_margin_size_b = remaining_free_space;
          }
          JustifyContent::FlexEnd => {
            line.items[0].main_auto_margin_size_a = remaining_free_space;
          }
          JustifyContent::Center => {
            line.items[0].main_auto_margin_size_a = 0.5 * remaining_free_space;
            line.items[last].main_auto_margin_size_b = 0.5 * remaining_free_space;
          }
          JustifyContent::SpaceAround => {
            let space_per_edge = remaining_free_space / (2 * num_items) as f32;
            for item in &mut line.items {
              item.main_auto_margin_size_a = space_per_edge;
              item.main_auto_margin_size_b = space_per_edge;
            }
          }
        }
      }
    }

    // Assign offsets and snap the outer edges to the pixel grid.
    let first = &line.items[0];
    let reverse_offset =
      used_main_size - first.used_main_size + first.main.margin_a + first.main.margin_b;

    let mut cursor = 0.0;
    for item in &mut line.items {
      item.main_offset = cursor + item.main.margin_a + item.main_auto_margin_size_a;
      cursor += item.used_main_size + item.main_auto_margin_size_a + item.main_auto_margin_size_b;

      if self.axes.direction_reverse() {
        item.main_offset = reverse_offset - item.main_offset;
      }

      self
        .host
        .snap_to_pixel_grid(&mut item.main_offset, &mut item.used_main_size);
    }
  }

  /// Determines each item's hypothetical cross size, formatting the child
  /// when its cross extent is not known from style alone.
  fn determine_hypothetical_cross_sizes(&mut self, lines: &mut [FlexLine<H::Element>]) {
    for line in lines.iter_mut() {
      for item in &mut line.items {
        let mut child_box = self
          .host
          .build_box(item.element, self.containing_block, false, Some(0.0));
        let content_size = child_box.content_size();
        let used_main_size_inner = item.used_main_size - item.main.sum_edges;

        if self.axes.main_is_horizontal() {
          if content_size.height < 0.0 {
            child_box.set_content(Size::new(used_main_size_inner, content_size.height));
            self
              .host
              .format_element(item.element, self.containing_block, &mut child_box);
            item.hypothetical_cross_size =
              child_box.content_size().height + item.cross.sum_edges;
          } else {
            item.hypothetical_cross_size = content_size.height + item.cross.sum_edges;
          }
        } else if content_size.width < 0.0 || item.cross.auto_size {
          child_box.set_content(Size::new(content_size.width, used_main_size_inner));
          item.hypothetical_cross_size = self
            .host
            .shrink_to_fit_width(item.element, self.containing_block)
            + item.cross.sum_edges;
        } else {
          item.hypothetical_cross_size = content_size.width + item.cross.sum_edges;
        }
      }
    }
  }

  /// Determines the cross size of each line, including the
  /// `align-content: stretch` distribution of surplus space.
  fn determine_line_cross_sizes(
    &self,
    lines: &mut [FlexLine<H::Element>],
    cross_available_size: f32,
    cross_min_size: f32,
    cross_max_size: f32,
  ) {
    if cross_available_size >= 0.0 && self.axes.single_line() && lines.len() == 1 {
      lines[0].cross_size = cross_available_size;
    } else {
      for line in lines.iter_mut() {
        let largest_hypothetical_cross_size = line
          .items
          .iter()
          .map(|item| item.hypothetical_cross_size)
          .fold(f32::MIN, f32::max);

        line.cross_size = largest_hypothetical_cross_size.max(0.0);

        if self.axes.single_line() {
          line.cross_size = clamp(line.cross_size, cross_min_size, cross_max_size);
        }
      }
    }

    // Stretch the lines out if there is extra space.
    if cross_available_size >= 0.0 && self.computed.align_content == AlignContent::Stretch {
      let remaining_space = cross_available_size
        - lines.iter().map(|line| line.cross_size).sum::<f32>();

      if remaining_space > 0.0 {
        let add_space_per_line = remaining_space / lines.len() as f32;
        for line in lines.iter_mut() {
          line.cross_size += add_space_per_line;
        }
      }
    }
  }

  /// Determines the used cross size of each item.
  ///
  /// Stretched items should be re-formatted at their stretched size so
  /// percentages in descendants can resolve against it; that pass is
  /// skipped, so such percentages see the pre-stretch size.
  fn determine_used_cross_sizes(&self, lines: &mut [FlexLine<H::Element>]) {
    for line in lines.iter_mut() {
      for item in &mut line.items {
        let stretch_item = item.align_self == AlignSelf::Stretch;
        if stretch_item
          && item.cross.auto_size
          && !item.cross.auto_margin_a
          && !item.cross.auto_margin_b
        {
          item.used_cross_size = clamp(
            line.cross_size - item.cross.sum_edges,
            item.cross.min_size,
            item.cross.max_size,
          ) + item.cross.sum_edges;
        } else {
          item.used_cross_size = item.hypothetical_cross_size;
        }
      }
    }
  }

  /// Positions each item within its line: cross auto margins first, then
  /// `align-self`, then the wrap-reverse flip, then pixel snapping.
  fn align_cross_axis(&mut self, line: &mut FlexLine<H::Element>) {
    for item in &mut line.items {
      let remaining_space = line.cross_size - item.used_cross_size;

      item.cross_offset = item.cross.margin_a;

      if remaining_space > 0.0 {
        let num_auto_margins =
          usize::from(item.cross.auto_margin_a) + usize::from(item.cross.auto_margin_b);
        if num_auto_margins > 0 {
          let space_per_auto_margin = remaining_space / num_auto_margins as f32;
          item.cross_offset = item.cross.margin_a
            + if item.cross.auto_margin_a {
              space_per_auto_margin
            } else {
              0.0
            };
        } else {
          match item.align_self {
            AlignSelf::Auto => {
              // Replaced by the container's align-items at build time.
              debug_assert!(false, "auto align-self survived item build");
            }
            AlignSelf::FlexStart => {}
            AlignSelf::FlexEnd => {
              item.cross_offset = item.cross.margin_a + remaining_space;
            }
            AlignSelf::Center => {
              item.cross_offset = item.cross.margin_a + 0.5 * remaining_space;
            }
            AlignSelf::Baseline => {
              warn!("{}", UnsupportedFeature::BaselineAlignment);
            }
            AlignSelf::Stretch => {
              // Sizing already absorbed the remaining space.
            }
          }
        }
      }

      if self.axes.wrap_reverse() {
        let reverse_offset =
          line.cross_size - item.used_cross_size + item.cross.margin_a + item.cross.margin_b;
        item.cross_offset = reverse_offset - item.cross_offset;
      }
    }

    // Snap the outer item cross edges to the pixel grid.
    for item in &mut line.items {
      self
        .host
        .snap_to_pixel_grid(&mut item.cross_offset, &mut item.used_cross_size);
    }
  }

  /// Packs the lines along the cross axis per `align-content` and returns
  /// the container's used cross size.
  fn pack_lines(&mut self, lines: &mut [FlexLine<H::Element>], cross_available_size: f32) -> f32 {
    let accumulated_lines_cross_size: f32 = lines.iter().map(|line| line.cross_size).sum();

    // With infinite available cross size, the used cross size becomes the
    // accumulated line cross size.
    let used_cross_size = if cross_available_size >= 0.0 {
      cross_available_size
    } else {
      accumulated_lines_cross_size
    };

    let remaining_free_space = used_cross_size - accumulated_lines_cross_size;
    let num_lines = lines.len();
    let last = num_lines - 1;

    if remaining_free_space > 0.0 {
      match self.computed.align_content {
        AlignContent::SpaceBetween | AlignContent::FlexStart => {
          if self.computed.align_content == AlignContent::SpaceBetween && num_lines > 1 {
            let space_per_edge = remaining_free_space / (2 * num_lines - 2) as f32;
            for (index, line) in lines.iter_mut().enumerate() {
              if index > 0 {
                line.cross_spacing_a = space_per_edge;
              }
              if index < last {
                line.cross_spacing_b = space_per_edge;
              }
            }
          }
          // The start-packed trailing spacing is applied even after edge
          // spacing has been placed above.
          lines[last].cross_spacing_b = remaining_free_space;
        }
        AlignContent::FlexEnd => {
          lines[0].cross_spacing_a = remaining_free_space;
        }
        AlignContent::Center => {
          lines[0].cross_spacing_a = 0.5 * remaining_free_space;
          lines[last].cross_spacing_b = 0.5 * remaining_free_space;
        }
        AlignContent::SpaceAround => {
          let space_per_edge = remaining_free_space / (2 * num_lines) as f32;
          for line in lines.iter_mut() {
            line.cross_spacing_a = space_per_edge;
            line.cross_spacing_b = space_per_edge;
          }
        }
        AlignContent::Stretch => {
          // Line cross sizing already absorbed the remaining space.
        }
      }
    }

    // Assign line offsets and snap the line edges to the pixel grid.
    let reverse_offset = used_cross_size - lines[0].cross_size;
    let mut cursor = 0.0;
    for line in lines.iter_mut() {
      line.cross_offset = cursor + line.cross_spacing_a;
      cursor = line.cross_offset + line.cross_size + line.cross_spacing_b;

      if self.axes.wrap_reverse() {
        line.cross_offset = reverse_offset - line.cross_offset;
      }

      self
        .host
        .snap_to_pixel_grid(&mut line.cross_offset, &mut line.cross_size);
    }

    used_cross_size
  }

  /// Formats every item at its used size, writes offsets through the
  /// host, and accumulates the container's overflow extent.
  fn format_items(&mut self, lines: &[FlexLine<H::Element>]) {
    for line in lines {
      for item in &line.items {
        let mut child_box = self
          .host
          .build_box(item.element, self.containing_block, false, Some(0.0));

        let item_main_size = item.used_main_size - item.main.sum_edges;
        let item_cross_size = item.used_cross_size - item.cross.sum_edges;

        child_box.set_content(self.axes.size(item_main_size, item_cross_size));

        let item_offset = self
          .axes
          .point(item.main_offset, line.cross_offset + item.cross_offset);

        let child_overflow_size =
          self
            .host
            .format_element(item.element, self.containing_block, &mut child_box);

        // Position the element within the flex container.
        self.host.set_offset(
          item.element,
          self.content_offset.translate(item_offset),
          self.element,
        );

        // Item contents may overflow; propagate the extent to the
        // container.
        self.overflow_size = self.overflow_size.max(Size::new(
          item_offset.x + child_overflow_size.width,
          item_offset.y + child_overflow_size.height,
        ));
      }
    }
  }
}
