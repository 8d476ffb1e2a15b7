//! Pen swatches shown in the toolbar.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Initial pen color, matching the canvas engine's default.
pub const DEFAULT_COLOR: &str = "rgb(255, 255, 255)";

pub const SWATCHES: &[&str] = &[
    "#ffffff", "#ee3333", "#e64980", "#be4bdb", "#893200", "#228be6", "#3333ee", "#40c057", "#00aa00", "#fab005",
    "#fd7e14",
];
