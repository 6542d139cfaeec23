use crate::board::BlockId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoardAction {
    BeginDrag {
        block_id: BlockId,
        x: f32,
        y: f32,
        pointer_id: Option<i32>,
    },
    DragMove {
        x: f32,
        y: f32,
    },
    DragEnd {
        pointer_id: Option<i32>,
    },
    CancelDrag,
    PalettePress {
        value: u32,
        x: f32,
        y: f32,
        pointer_id: Option<i32>,
    },
    PaletteMove {
        x: f32,
        y: f32,
    },
    PaletteRelease {
        pointer_id: Option<i32>,
    },
    OpenSplitMenu {
        block_id: BlockId,
        x: f32,
        y: f32,
    },
    CloseSplitMenu,
    ChooseSplit {
        block_id: BlockId,
        left_value: u32,
    },
    Remove {
        block_id: BlockId,
    },
}
