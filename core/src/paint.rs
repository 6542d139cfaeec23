// Fill colors for values 1 through 8, in value order.
pub const BASE_PALETTE: [[u8; 4]; 8] = [
    [229, 57, 53, 255],  // 1 red
    [251, 140, 0, 255],  // 2 orange
    [253, 216, 53, 255], // 3 yellow
    [67, 160, 71, 255],  // 4 green
    [0, 172, 193, 255],  // 5 cyan
    [57, 73, 171, 255],  // 6 indigo
    [142, 36, 170, 255], // 7 violet
    [216, 27, 96, 255],  // 8 magenta
];

// Row bands for the value-9 gradient, bottom row first.
pub const GRAY_SHADES: [[u8; 4]; 3] = [
    [189, 189, 189, 255],
    [158, 158, 158, 255],
    [97, 97, 97, 255],
];

pub const TENS_WHITE: [u8; 4] = [255, 255, 255, 255];
pub const OUTLINE_HIGHLIGHT: [u8; 4] = [255, 193, 7, 255];
pub const EYE_DARK: [u8; 4] = [38, 30, 28, 255];
pub const STAR_BLUE: [u8; 4] = [30, 136, 229, 255];
pub const STAR_RED: [u8; 4] = [229, 57, 53, 255];

pub fn base_fill(value: u32) -> [u8; 4] {
    let index = value.clamp(1, BASE_PALETTE.len() as u32) as usize - 1;
    BASE_PALETTE[index]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubePaint {
    pub fill: [u8; 4],
    pub outlined: bool,
}

pub fn cube_paint(value: u32, index: usize) -> CubePaint {
    let value = value.max(1);
    if value > 10 {
        let tens = (value / 10 * 10) as usize;
        if index < tens {
            return CubePaint {
                fill: TENS_WHITE,
                outlined: true,
            };
        }
        // Remainder cubes restart the same rules with a re-based index.
        return cube_paint(value % 10, index - tens);
    }
    match value {
        7 => CubePaint {
            fill: base_fill(index as u32 + 1),
            outlined: false,
        },
        9 => CubePaint {
            fill: GRAY_SHADES[(index / 3).min(GRAY_SHADES.len() - 1)],
            outlined: false,
        },
        10 => CubePaint {
            fill: TENS_WHITE,
            outlined: true,
        },
        _ => CubePaint {
            fill: base_fill(value),
            outlined: false,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EyeStyle {
    SingleOval,
    PairOval,
    LeftStarBlue,
    PairStarRed,
}

pub fn eye_style(value: u32) -> EyeStyle {
    match value.max(1) {
        1 => EyeStyle::SingleOval,
        5 => EyeStyle::LeftStarBlue,
        10 => EyeStyle::PairStarRed,
        _ => EyeStyle::PairOval,
    }
}
