use rand::Rng;

/// Alpha applied to rectangle fills, written as the `30` suffix of `#rrggbb30`.
pub const FILL_ALPHA: u8 = 0x30;

/// Opaque RGB color printed as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Each of the six hex digits is drawn independently from 0..16.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut byte = || (rng.random_range(0..16u8) << 4) | rng.random_range(0..16u8);
        let r = byte();
        let g = byte();
        let b = byte();
        Self { r, g, b }
    }

    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// CSS-style color with a two-digit alpha suffix, e.g. `#12ab9f30`.
    pub fn with_alpha_suffix(self, alpha: u8) -> String {
        format!("{self}{alpha:02x}")
    }

    pub fn to_egui(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn to_egui_with_alpha(self, alpha: u8) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
