//! Flex layout
//!
//! This module contains the CSS flexbox layout algorithm and the seams it
//! hangs off of: the logical-axis mapping, per-axis edge resolution, and
//! the host collaborator contract through which children are measured,
//! formatted, and positioned.
//!
//! # Architecture
//!
//! Layout runs as a fixed pipeline over transient per-call state:
//!
//! 1. **Item build**: one `FlexItem` per in-flow child, with flex base
//!    size and hypothetical main size (`flex.rs`)
//! 2. **Line collection**: items grouped into lines under the wrap limit
//! 3. **Flexible length resolution**: the grow/shrink fixed point
//! 4. **Main-axis alignment**: auto margins and `justify-content`
//! 5. **Cross sizing**: per-item hypothetical and per-line cross sizes
//! 6. **Cross-axis alignment**: `align-self`, then line packing via
//!    `align-content`
//! 7. **Finalization**: children formatted at their used sizes, offsets
//!    written back through the host
//!
//! The axis mapper (`axis.rs`) keeps the pipeline in logical (main, cross)
//! coordinates; physical coordinates only appear at the host boundary.
//!
//! # Module Organization
//!
//! - `axis.rs` - logical axis mapping for flex-direction/flex-wrap
//! - `edges.rs` - per-axis margin/padding/border and min/max resolution
//! - `host.rs` - `LayoutHost` trait and the `ElementBox` exchange type
//! - `utils.rs` - shared numeric helpers
//! - `flex.rs` - the flex formatting context itself

pub mod axis;
pub mod edges;
pub mod flex;
pub mod host;
pub mod utils;

pub use axis::FlexAxes;
pub use edges::{AxisComputedSize, AxisSizing};
pub use flex::FlexFormattingContext;
pub use host::{ElementBox, LayoutHost};
