use crate::paint::{cube_paint, eye_style, EyeStyle};
use crate::stack::{block_extent, cube_offsets, face_cube_index};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeSprite {
    pub dx: f32,
    pub dy: f32,
    pub fill: [u8; 4],
    pub outlined: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlockSprite {
    pub value: u32,
    pub cubes: Vec<CubeSprite>,
    pub face_index: usize,
    pub eyes: EyeStyle,
    pub width: f32,
    pub height: f32,
}

pub fn block_sprite(value: u32) -> BlockSprite {
    let value = value.max(1);
    let (width, height) = block_extent(value);
    let cubes = cube_offsets(value)
        .into_iter()
        .enumerate()
        .map(|(index, (dx, dy))| {
            let paint = cube_paint(value, index);
            CubeSprite {
                dx,
                dy,
                fill: paint.fill,
                outlined: paint.outlined,
            }
        })
        .collect();
    BlockSprite {
        value,
        cubes,
        face_index: face_cube_index(value),
        eyes: eye_style(value),
        width,
        height,
    }
}
