use kazuburokku_core::paint::{
    base_fill, cube_paint, eye_style, EyeStyle, GRAY_SHADES, TENS_WHITE,
};

#[test]
fn simple_values_paint_flat() {
    for value in [1, 2, 3, 4, 5, 6, 8] {
        for index in 0..value as usize {
            let paint = cube_paint(value, index);
            assert_eq!(paint.fill, base_fill(value));
            assert!(!paint.outlined);
        }
    }
}

#[test]
fn seven_paints_a_rainbow_bottom_up() {
    for index in 0..7 {
        let paint = cube_paint(7, index);
        assert_eq!(paint.fill, base_fill(index as u32 + 1));
        assert!(!paint.outlined);
    }
    for a in 0..7 {
        for b in (a + 1)..7 {
            assert_ne!(cube_paint(7, a).fill, cube_paint(7, b).fill);
        }
    }
}

#[test]
fn nine_paints_three_gray_bands() {
    for index in 0..3 {
        assert_eq!(cube_paint(9, index).fill, GRAY_SHADES[0]);
    }
    for index in 3..6 {
        assert_eq!(cube_paint(9, index).fill, GRAY_SHADES[1]);
    }
    for index in 6..9 {
        assert_eq!(cube_paint(9, index).fill, GRAY_SHADES[2]);
    }
}

#[test]
fn ten_is_white_with_highlight_outline() {
    for index in 0..10 {
        let paint = cube_paint(10, index);
        assert_eq!(paint.fill, TENS_WHITE);
        assert!(paint.outlined);
    }
}

#[test]
fn twenty_three_splits_into_tens_and_remainder() {
    for index in 0..20 {
        let paint = cube_paint(23, index);
        assert_eq!(paint.fill, TENS_WHITE);
        assert!(paint.outlined);
    }
    for index in 20..23 {
        assert_eq!(cube_paint(23, index), cube_paint(3, index - 20));
        assert_eq!(cube_paint(23, index).fill, base_fill(3));
    }
}

#[test]
fn remainder_seven_is_a_rainbow_sub_block() {
    for index in 0..7 {
        assert_eq!(cube_paint(17, 10 + index), cube_paint(7, index));
    }
}

#[test]
fn remainder_nine_is_a_gray_sub_block() {
    for index in 0..9 {
        assert_eq!(cube_paint(19, 10 + index), cube_paint(9, index));
    }
}

#[test]
fn exact_multiples_of_ten_are_fully_white() {
    for value in [20, 30, 40] {
        for index in 0..value as usize {
            let paint = cube_paint(value, index);
            assert_eq!(paint.fill, TENS_WHITE);
            assert!(paint.outlined);
        }
    }
}

#[test]
fn eye_styles_follow_value() {
    assert_eq!(eye_style(1), EyeStyle::SingleOval);
    assert_eq!(eye_style(5), EyeStyle::LeftStarBlue);
    assert_eq!(eye_style(10), EyeStyle::PairStarRed);
    for value in [2, 3, 4, 6, 7, 8, 9, 11, 23] {
        assert_eq!(eye_style(value), EyeStyle::PairOval);
    }
}
