use serde::{Deserialize, Serialize};

use kazuburokku_core::BlockId;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockView {
    pub id: BlockId,
    pub value: u32,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteDragView {
    pub value: u32,
    pub x: f32,
    pub y: f32,
    pub armed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitMenuView {
    pub block_id: BlockId,
    pub value: u32,
    pub anchor: (f32, f32),
    pub choices: Vec<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSnapshot {
    pub blocks: Vec<BlockView>,
    pub active_id: Option<BlockId>,
    pub overlap_target: Option<BlockId>,
    pub palette_drag: Option<PaletteDragView>,
    pub split_menu: Option<SplitMenuView>,
}
