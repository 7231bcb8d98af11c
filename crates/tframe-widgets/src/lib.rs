#![forbid(unsafe_code)]

//! Border types, titles, and composable frames for tframe.

pub mod border;
pub mod border_type;
pub mod frame;
pub mod presets;
pub mod title;

pub use border::Border;
pub use border_type::{
    BorderComponent, BorderType, BorderTypeError, Combine, Corner, Pick, Side, Slot, ThicknessSpec,
};
pub use frame::{ChildFrame, EdgeCoords, Frame, FrameError};
pub use presets::{Preset, UnknownPreset};
pub use title::{Title, align_to_position};
