pub mod action;
pub mod board;
pub mod catalog;
pub mod paint;
pub mod sprite;
pub mod stack;

pub use action::BoardAction;
pub use board::{split_choices, Block, BlockBoard, BlockId, COMBINE_OVERLAP_MIN, SPLIT_SPACING};
pub use catalog::{palette_entry, palette_label, PaletteEntry, BLOCK_PALETTE};
pub use paint::{base_fill, cube_paint, eye_style, CubePaint, EyeStyle};
pub use sprite::{block_sprite, BlockSprite, CubeSprite};
pub use stack::{
    block_extent, cube_cells, cube_offsets, face_cube_index, stack_columns, stack_rows,
    stack_shape, StackShape, CUBE_GAP, CUBE_SIZE, CUBE_STEP,
};
