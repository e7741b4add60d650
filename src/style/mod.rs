//! Style system types
//!
//! Computed-style inputs to layout. The host's style system (cascade,
//! inheritance, unit resolution) runs before layout and hands over one
//! [`ComputedStyle`] per element; layout only reads it.

pub mod types;
pub mod values;

use types::{
    AlignContent, AlignItems, AlignSelf, BoxSizing, Display, FlexBasis, FlexDirection, FlexWrap,
    JustifyContent, Overflow, Position,
};
use values::Length;

/// The computed style properties layout consumes.
///
/// Field conventions follow the computed-value forms the engine expects:
///
/// - `width`/`height`: `None` means `auto`.
/// - `min_width`/`min_height`: `None` means no lower bound (resolves to 0).
/// - `max_width`/`max_height`: `None` means no upper bound (resolves to
///   infinity).
/// - `margin_*`: `None` means `auto`; the default is an explicit zero.
/// - Percentages are still percentages here; they resolve during layout
///   against the axis base the engine chooses.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    // Display and positioning
    pub display: Display,
    pub position: Position,
    pub box_sizing: BoxSizing,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,

    // Box model
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub min_width: Option<Length>,
    pub min_height: Option<Length>,
    pub max_width: Option<Length>,
    pub max_height: Option<Length>,

    pub margin_top: Option<Length>,
    pub margin_right: Option<Length>,
    pub margin_bottom: Option<Length>,
    pub margin_left: Option<Length>,

    pub padding_top: Length,
    pub padding_right: Length,
    pub padding_bottom: Length,
    pub padding_left: Length,

    pub border_top_width: Length,
    pub border_right_width: Length,
    pub border_bottom_width: Length,
    pub border_left_width: Length,

    // Flex container
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub row_gap: Length,
    pub column_gap: Length,

    // Flex item
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: FlexBasis,
    pub align_self: AlignSelf,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: Display::Block,
            position: Position::Static,
            box_sizing: BoxSizing::ContentBox,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,

            width: None,
            height: None,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,

            margin_top: Some(Length::ZERO),
            margin_right: Some(Length::ZERO),
            margin_bottom: Some(Length::ZERO),
            margin_left: Some(Length::ZERO),

            padding_top: Length::ZERO,
            padding_right: Length::ZERO,
            padding_bottom: Length::ZERO,
            padding_left: Length::ZERO,

            border_top_width: Length::ZERO,
            border_right_width: Length::ZERO,
            border_bottom_width: Length::ZERO,
            border_left_width: Length::ZERO,

            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Nowrap,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::Stretch,
            row_gap: Length::ZERO,
            column_gap: Length::ZERO,

            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: FlexBasis::Auto,
            align_self: AlignSelf::Auto,
        }
    }
}
