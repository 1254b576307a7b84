/// Accessibility options that shape rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for chair icons and markers.
    pub ascii_only: bool,
    /// Use a high-contrast color palette.
    pub high_contrast: bool,
}
