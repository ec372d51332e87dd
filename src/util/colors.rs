use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x0061c9d4);
pub const SECONDARY: Color = Color::from_u32(0x002a7a82);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000d0f12);
pub const ACCENT: Color = Color::from_u32(0x00e8b84a);

/// Backdrop tints applied behind the shell, one per wallpaper; indices wrap
/// so the gallery may grow beyond the palette.
pub const BACKDROPS: [Color; 5] = [
    Color::from_u32(0x000d0f12),
    Color::from_u32(0x00101320),
    Color::from_u32(0x000f1710),
    Color::from_u32(0x00071420),
    Color::from_u32(0x001a1410),
];
