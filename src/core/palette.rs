//! Background/foreground color pairs

use rand::Rng;

/// An RGB color
pub type Rgb = [u8; 3];

/// A background color with a contrasting text color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub name: &'static str,
    pub background: Rgb,
    pub foreground: Rgb,
}

/// Orange family backgrounds with their complementary text colors
pub const PALETTE: [ColorPair; 4] = [
    ColorPair {
        name: "orange/blue",
        background: [255, 165, 0],
        foreground: [0, 0, 255],
    },
    ColorPair {
        name: "coral/indigo",
        background: [255, 127, 80],
        foreground: [75, 0, 130],
    },
    ColorPair {
        name: "red-orange/teal",
        background: [255, 69, 0],
        foreground: [0, 128, 128],
    },
    ColorPair {
        name: "dark-orange/dark-turquoise",
        background: [255, 140, 0],
        foreground: [0, 206, 209],
    },
];

/// Pick one pair from [`PALETTE`] uniformly at random
pub fn pick_colors<R: Rng + ?Sized>(rng: &mut R) -> ColorPair {
    PALETTE[rng.random_range(0..PALETTE.len())]
}
