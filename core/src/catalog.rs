#[derive(Clone, Copy, Debug)]
pub struct PaletteEntry {
    pub value: u32,
    pub label: &'static str,
}

pub const BLOCK_PALETTE: &[PaletteEntry] = &[
    PaletteEntry { value: 1, label: "One" },
    PaletteEntry { value: 2, label: "Two" },
    PaletteEntry { value: 3, label: "Three" },
    PaletteEntry { value: 4, label: "Four" },
    PaletteEntry { value: 5, label: "Five" },
    PaletteEntry { value: 6, label: "Six" },
    PaletteEntry { value: 7, label: "Seven" },
    PaletteEntry { value: 8, label: "Eight" },
    PaletteEntry { value: 9, label: "Nine" },
    PaletteEntry { value: 10, label: "Ten" },
];

pub fn palette_entry(value: u32) -> Option<&'static PaletteEntry> {
    BLOCK_PALETTE.iter().find(|entry| entry.value == value)
}

pub fn palette_label(value: u32) -> String {
    match palette_entry(value) {
        Some(entry) => entry.label.to_string(),
        None => value.to_string(),
    }
}
