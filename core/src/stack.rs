pub const CUBE_SIZE: f32 = 40.0;
pub const CUBE_GAP: f32 = 2.0;
pub const CUBE_STEP: f32 = CUBE_SIZE + CUBE_GAP;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackShape {
    Square { side: u32 },
    SingleColumn,
    PairedColumns,
    TenColumns,
}

impl StackShape {
    pub fn columns(self, value: u32) -> u32 {
        match self {
            StackShape::Square { side } => side,
            StackShape::SingleColumn => 1,
            StackShape::PairedColumns => 2,
            StackShape::TenColumns => (value / 10).max(1),
        }
    }
}

pub type StackPredicate = fn(u32) -> bool;

// First matching rule wins; the order below is the precedence.
pub const STACK_RULES: &[(StackPredicate, StackShape)] = &[
    (|value| value == 4, StackShape::Square { side: 2 }),
    (|value| value == 7, StackShape::SingleColumn),
    (|value| value == 9, StackShape::Square { side: 3 }),
    (|value| value <= 5, StackShape::SingleColumn),
    (|value| value <= 29, StackShape::PairedColumns),
    (|_| true, StackShape::TenColumns),
];

pub fn stack_shape(value: u32) -> StackShape {
    let value = value.max(1);
    STACK_RULES
        .iter()
        .find(|(applies, _)| applies(value))
        .map(|(_, shape)| *shape)
        .unwrap_or(StackShape::SingleColumn)
}

pub fn stack_columns(value: u32) -> u32 {
    let value = value.max(1);
    stack_shape(value).columns(value)
}

pub fn stack_rows(value: u32) -> u32 {
    let value = value.max(1);
    let cols = stack_columns(value);
    (value + cols - 1) / cols
}

// One (col, row) cell per cube, row 0 at the bottom, filled
// left-to-right then upward, so a partial row ends up on top.
pub fn cube_cells(value: u32) -> Vec<(u32, u32)> {
    let value = value.max(1);
    let cols = stack_columns(value);
    (0..value).map(|index| (index % cols, index / cols)).collect()
}

pub fn cube_offsets(value: u32) -> Vec<(f32, f32)> {
    let rows = stack_rows(value);
    cube_cells(value)
        .into_iter()
        .map(|(col, row)| {
            (
                col as f32 * CUBE_STEP,
                (rows - 1 - row) as f32 * CUBE_STEP,
            )
        })
        .collect()
}

pub fn block_extent(value: u32) -> (f32, f32) {
    let cols = stack_columns(value);
    let rows = stack_rows(value);
    (
        cols as f32 * CUBE_STEP - CUBE_GAP,
        rows as f32 * CUBE_STEP - CUBE_GAP,
    )
}

// Topmost cube wears the face; ties go to the leftmost one.
pub fn face_cube_index(value: u32) -> usize {
    let mut face = 0usize;
    let mut face_cell = (0u32, 0u32);
    for (index, (col, row)) in cube_cells(value).into_iter().enumerate() {
        if index == 0 || row > face_cell.1 || (row == face_cell.1 && col < face_cell.0) {
            face = index;
            face_cell = (col, row);
        }
    }
    face
}
