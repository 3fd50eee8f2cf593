//! Core functionality for the volumetric image tool
//!
//! This crate owns the cursor/slice synchronization logic: the backing
//! volume, the shared 3D cursor, the six derived cross-sections and the
//! controller that keeps every marker consistent. It has no graphics
//! dependency; rendering is reached through the [`ViewPort`] capability.

pub mod axis;
pub mod cursor;
pub mod error;
pub mod events;
pub mod levels;
pub mod slice;
pub mod state;
pub mod sync;
pub mod viewport;
pub mod volume;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use axis::{Axis, AxisSet};
pub use cursor::{CursorState, Position};
pub use error::{CoreError, CoreResult};
pub use events::{MarkerEventQueue, MarkerMoved};
pub use levels::ColorLevels;
pub use slice::{SliceEngine, SliceKind, SliceSet};
pub use state::{Colormap, ViewerSettings};
pub use sync::{Nudge, StatusReadout, SyncController, SyncState};
pub use viewport::{MarkerCallback, MarkerId, MarkerOrientation, ViewPort, ViewPorts};
pub use volume::{Bounds, DisplayMode, ShapePlan, Volume, VolumeStore};
