//! Built-in theme tables.
//!
//! Tables list one `(rgb, palette index)` pair per role, in canonical role
//! order. Colors follow each theme's published palette.

use super::{ColorSet, Rgb, ThemeRecord, ThemeStyle};

pub(super) fn dracula() -> ThemeRecord {
    ThemeRecord {
        name: "dracula",
        style: ThemeStyle::Dark,
        colors: ColorSet::from_table([
            (Rgb::new(189, 147, 249), 141), // purple
            (Rgb::new(80, 250, 123), 84),   // green
            (Rgb::new(139, 233, 253), 117), // cyan
            (Rgb::new(255, 121, 198), 212), // pink
            (Rgb::new(241, 250, 140), 228), // yellow
            (Rgb::new(255, 85, 85), 203),   // red
            (Rgb::new(255, 184, 108), 215), // orange
            (Rgb::new(139, 233, 253), 117), // blue
            (Rgb::new(98, 114, 164), 61),   // comment
            (Rgb::new(248, 248, 242), 253), // white
            (Rgb::new(40, 42, 54), 236),    // background
            (Rgb::new(68, 71, 90), 239),    // selection
        ]),
    }
}

pub(super) fn cyberpunk() -> ThemeRecord {
    ThemeRecord {
        name: "cyberpunk",
        style: ThemeStyle::Dark,
        colors: ColorSet::from_table([
            (Rgb::new(138, 43, 226), 92),   // purple
            (Rgb::new(0, 255, 0), 46),      // green
            (Rgb::new(0, 255, 255), 51),    // cyan
            (Rgb::new(255, 20, 147), 198),  // pink
            (Rgb::new(255, 255, 0), 226),   // yellow
            (Rgb::new(255, 0, 0), 196),     // red
            (Rgb::new(255, 165, 0), 208),   // orange
            (Rgb::new(0, 191, 255), 39),    // blue
            (Rgb::new(128, 128, 128), 244), // comment
            (Rgb::new(255, 255, 255), 15),  // white
            (Rgb::new(0, 0, 0), 0),         // background
            (Rgb::new(75, 0, 130), 54),     // selection
        ]),
    }
}

pub(super) fn nord() -> ThemeRecord {
    ThemeRecord {
        name: "nord",
        style: ThemeStyle::Dark,
        colors: ColorSet::from_table([
            (Rgb::new(180, 142, 173), 139), // purple (nord15)
            (Rgb::new(163, 190, 140), 150), // green (nord14)
            (Rgb::new(136, 192, 208), 116), // cyan (nord8)
            (Rgb::new(180, 142, 173), 139), // pink (nord15)
            (Rgb::new(235, 203, 139), 222), // yellow (nord13)
            (Rgb::new(191, 97, 106), 131),  // red (nord11)
            (Rgb::new(208, 135, 112), 173), // orange (nord12)
            (Rgb::new(129, 161, 193), 109), // blue (nord9)
            (Rgb::new(76, 86, 106), 60),    // comment (nord3)
            (Rgb::new(236, 239, 244), 255), // white (nord6)
            (Rgb::new(46, 52, 64), 235),    // background (nord0)
            (Rgb::new(67, 76, 94), 238),    // selection (nord2)
        ]),
    }
}

pub(super) fn gruvbox() -> ThemeRecord {
    ThemeRecord {
        name: "gruvbox",
        style: ThemeStyle::Dark,
        colors: ColorSet::from_table([
            (Rgb::new(211, 134, 155), 175), // purple
            (Rgb::new(184, 187, 38), 142),  // green
            (Rgb::new(142, 192, 124), 108), // cyan (aqua)
            (Rgb::new(211, 134, 155), 175), // pink
            (Rgb::new(250, 189, 47), 214),  // yellow
            (Rgb::new(251, 73, 52), 167),   // red
            (Rgb::new(254, 128, 25), 208),  // orange
            (Rgb::new(131, 165, 152), 109), // blue
            (Rgb::new(146, 131, 116), 102), // comment (gray)
            (Rgb::new(235, 219, 178), 223), // white (fg)
            (Rgb::new(40, 40, 40), 235),    // background (bg)
            (Rgb::new(60, 56, 54), 237),    // selection (bg1)
        ]),
    }
}
