pub mod error;
pub mod geometry;
pub mod layout;
pub mod style;

pub use error::UnsupportedFeature;
pub use geometry::{Point, Size};
pub use layout::axis::FlexAxes;
pub use layout::flex::FlexFormattingContext;
pub use layout::host::{ElementBox, LayoutHost};
pub use style::values::{Length, LengthUnit};
pub use style::ComputedStyle;
