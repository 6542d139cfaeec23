pub mod app_core;
pub mod input;
pub mod model;
pub mod runtime;

pub use app_core::{AppCore, AppSubscriber, AppSubscription};
pub use input::{DragSlopGate, SPAWN_DRAG_MIN_DISTANCE};
pub use model::{AppSnapshot, BlockView, PaletteDragView, SplitMenuView};
pub use runtime::{attach_view, GameView, ViewHooks};
