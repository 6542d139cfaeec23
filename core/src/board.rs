use serde::{Deserialize, Serialize};

use crate::stack::block_extent;

// Minimum box intersection on both axes before an overlap counts
// as an intent to combine; a grazing edge contact stays inert.
pub const COMBINE_OVERLAP_MIN: f32 = 8.0;
pub const SPLIT_SPACING: f32 = 24.0;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BlockId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub value: u32,
    pub x: f32,
    pub y: f32,
}

impl Block {
    pub fn extent(&self) -> (f32, f32) {
        block_extent(self.value)
    }
}

#[derive(Clone, Debug, Default)]
pub struct BlockBoard {
    // Insertion order doubles as draw order, back of the vec on top.
    blocks: Vec<Block>,
    next_id: u64,
}

impl BlockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> BlockId {
        self.next_id += 1;
        BlockId(self.next_id)
    }

    pub fn spawn(&mut self, value: u32, x: f32, y: f32) -> BlockId {
        let id = self.fresh_id();
        self.blocks.push(Block {
            id,
            value: value.max(1),
            x,
            y,
        });
        id
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    pub fn update_position(&mut self, id: BlockId, x: f32, y: f32) -> bool {
        match self.blocks.iter_mut().find(|block| block.id == id) {
            Some(block) => {
                block.x = x;
                block.y = y;
                true
            }
            None => false,
        }
    }

    pub fn raise(&mut self, id: BlockId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                let block = self.blocks.remove(index);
                self.blocks.push(block);
                true
            }
            None => false,
        }
    }

    pub fn check_overlap(&self, id: BlockId) -> Option<BlockId> {
        let dragged = self.get(id)?;
        self.blocks
            .iter()
            .filter(|other| other.id != id)
            .find(|other| boxes_overlap(dragged, other))
            .map(|other| other.id)
    }

    pub fn finalize_combine(&mut self, dragged: BlockId) -> Option<BlockId> {
        let target = self.check_overlap(dragged)?;
        let dragged_value = self.get(dragged)?.value;
        let target_block = *self.get(target)?;
        self.remove(dragged);
        self.remove(target);
        Some(self.spawn(
            dragged_value + target_block.value,
            target_block.x,
            target_block.y,
        ))
    }

    pub fn split(&mut self, id: BlockId, left_value: u32) -> Option<(BlockId, BlockId)> {
        let block = *self.get(id)?;
        if block.value <= 1 || left_value == 0 || left_value >= block.value {
            return None;
        }
        let right_value = block.value - left_value;
        self.remove(id);
        let left = self.spawn(left_value, block.x, block.y);
        let left_width = block_extent(left_value).0;
        let right = self.spawn(right_value, block.x + left_width + SPLIT_SPACING, block.y);
        Some((left, right))
    }

    pub fn remove(&mut self, id: BlockId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.blocks.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

pub fn split_choices(value: u32) -> Vec<u32> {
    (1..value).collect()
}

fn boxes_overlap(a: &Block, b: &Block) -> bool {
    let (a_width, a_height) = a.extent();
    let (b_width, b_height) = b.extent();
    let overlap_x = (a.x + a_width).min(b.x + b_width) - a.x.max(b.x);
    let overlap_y = (a.y + a_height).min(b.y + b_height) - a.y.max(b.y);
    overlap_x > COMBINE_OVERLAP_MIN && overlap_y > COMBINE_OVERLAP_MIN
}
