//! Shared test host for the flex integration suites
//!
//! `TestHost` is a scripted stand-in for an embedding layout engine: a
//! flat arena of elements with computed styles, fixed intrinsic sizes,
//! and recorders for the offsets and sizes the flex engine publishes.

#![allow(dead_code)]

use fastflex::geometry::{Point, Size};
use fastflex::layout::host::{ElementBox, LayoutHost};
use fastflex::style::types::{BoxSizing, Display, FlexDirection};
use fastflex::style::values::Length;
use fastflex::ComputedStyle;

pub const EPSILON: f32 = 1e-3;

struct ElementData {
    style: ComputedStyle,
    children: Vec<usize>,
    /// Width reported by shrink-to-fit; both axes substitute for unknown
    /// content sizes during formatting.
    intrinsic_size: Size,
    /// Visible overflow reported by `format_element`; defaults to the
    /// element's border-box size.
    overflow: Option<Size>,
}

pub struct TestHost {
    elements: Vec<ElementData>,
    /// Offset written by `set_offset`, per element.
    pub offsets: Vec<Option<Point>>,
    /// Content size from the most recent `format_element`, per element.
    pub formatted_sizes: Vec<Option<Size>>,
    /// Number of `format_element` calls, per element.
    pub format_calls: Vec<usize>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            offsets: Vec::new(),
            formatted_sizes: Vec::new(),
            format_calls: Vec::new(),
        }
    }

    pub fn add_root(&mut self, style: ComputedStyle) -> usize {
        self.push(style)
    }

    pub fn add_child(&mut self, parent: usize, style: ComputedStyle) -> usize {
        let child = self.push(style);
        self.elements[parent].children.push(child);
        child
    }

    pub fn set_intrinsic_size(&mut self, element: usize, size: Size) {
        self.elements[element].intrinsic_size = size;
    }

    pub fn set_overflow(&mut self, element: usize, size: Size) {
        self.elements[element].overflow = Some(size);
    }

    pub fn offset_of(&self, element: usize) -> Point {
        self.offsets[element].expect("element was not positioned")
    }

    pub fn formatted_size_of(&self, element: usize) -> Size {
        self.formatted_sizes[element].expect("element was not formatted")
    }

    /// Clears the recorders so a second layout run starts fresh.
    pub fn reset_recorders(&mut self) {
        for offset in &mut self.offsets {
            *offset = None;
        }
        for size in &mut self.formatted_sizes {
            *size = None;
        }
        for count in &mut self.format_calls {
            *count = 0;
        }
    }

    fn push(&mut self, style: ComputedStyle) -> usize {
        let id = self.elements.len();
        self.elements.push(ElementData {
            style,
            children: Vec::new(),
            intrinsic_size: Size::ZERO,
            overflow: None,
        });
        self.offsets.push(None);
        self.formatted_sizes.push(None);
        self.format_calls.push(0);
        id
    }

    fn padding_border(&self, element: usize, containing_block: Size) -> (f32, f32, f32, f32) {
        let style = &self.elements[element].style;
        let left = style.padding_left.resolve_against(containing_block.width).max(0.0)
            + style.border_left_width.to_px().max(0.0);
        let right = style.padding_right.resolve_against(containing_block.width).max(0.0)
            + style.border_right_width.to_px().max(0.0);
        let top = style.padding_top.resolve_against(containing_block.height).max(0.0)
            + style.border_top_width.to_px().max(0.0);
        let bottom = style.padding_bottom.resolve_against(containing_block.height).max(0.0)
            + style.border_bottom_width.to_px().max(0.0);
        (left, right, top, bottom)
    }
}

fn resolve_box_axis(size: Option<Length>, base: f32, border_box_correction: f32) -> f32 {
    match size {
        Some(length) => {
            let resolved = length.resolve_against(base) - border_box_correction;
            resolved.max(0.0)
        }
        None => -1.0,
    }
}

impl LayoutHost for TestHost {
    type Element = usize;

    fn computed_values(&self, element: usize) -> &ComputedStyle {
        &self.elements[element].style
    }

    fn child_count(&self, element: usize) -> usize {
        self.elements[element].children.len()
    }

    fn child(&self, element: usize, index: usize) -> usize {
        self.elements[element].children[index]
    }

    fn build_box(
        &mut self,
        element: usize,
        containing_block: Size,
        _inline: bool,
        _override_shrink_to_fit_width: Option<f32>,
    ) -> ElementBox {
        let (left, right, top, bottom) = self.padding_border(element, containing_block);
        let style = &self.elements[element].style;

        let (width_correction, height_correction) = match style.box_sizing {
            BoxSizing::BorderBox => (left + right, top + bottom),
            BoxSizing::ContentBox => (0.0, 0.0),
        };

        let width = resolve_box_axis(style.width, containing_block.width, width_correction);
        let height = resolve_box_axis(style.height, containing_block.height, height_correction);

        ElementBox::new(Point::new(left, top), Size::new(width, height))
    }

    fn format_element(
        &mut self,
        element: usize,
        containing_block: Size,
        element_box: &mut ElementBox,
    ) -> Size {
        let intrinsic = self.elements[element].intrinsic_size;
        let mut content = element_box.content_size();
        if content.width < 0.0 {
            content.width = intrinsic.width;
        }
        if content.height < 0.0 {
            content.height = intrinsic.height;
        }
        element_box.set_content(content);

        self.formatted_sizes[element] = Some(content);
        self.format_calls[element] += 1;

        match self.elements[element].overflow {
            Some(overflow) => overflow,
            None => {
                let (left, right, top, bottom) = self.padding_border(element, containing_block);
                Size::new(content.width + left + right, content.height + top + bottom)
            }
        }
    }

    fn shrink_to_fit_width(&mut self, element: usize, _containing_block: Size) -> f32 {
        self.elements[element].intrinsic_size.width
    }

    fn set_offset(&mut self, element: usize, offset: Point, _anchor: usize) {
        self.offsets[element] = Some(offset);
    }
}

/// A flex container style with the given direction.
pub fn flex_container(direction: FlexDirection) -> ComputedStyle {
    let mut style = ComputedStyle::default();
    style.display = Display::Flex;
    style.flex_direction = direction;
    style
}

/// An item style with a fixed pixel width.
pub fn item_with_width(width: f32) -> ComputedStyle {
    let mut style = ComputedStyle::default();
    style.width = Some(Length::px(width));
    style
}

/// An item style with fixed pixel width and height.
pub fn item_with_size(width: f32, height: f32) -> ComputedStyle {
    let mut style = ComputedStyle::default();
    style.width = Some(Length::px(width));
    style.height = Some(Length::px(height));
    style
}

/// Runs flex layout with unconstrained container min/max sizes.
pub fn format_flex(
    host: &mut TestHost,
    container: usize,
    available: Size,
    containing_block: Size,
) -> (ElementBox, Size) {
    let mut container_box = ElementBox::sized(available);
    let overflow = fastflex::FlexFormattingContext::new().format(
        host,
        &mut container_box,
        Size::ZERO,
        Size::new(f32::MAX, f32::MAX),
        containing_block,
        container,
    );
    (container_box, overflow)
}

pub fn assert_approx(actual: f32, expected: f32, context: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{context}: expected {expected}, got {actual}"
    );
}

pub fn assert_point(actual: Point, expected: Point, context: &str) {
    assert_approx(actual.x, expected.x, &format!("{context} (x)"));
    assert_approx(actual.y, expected.y, &format!("{context} (y)"));
}
