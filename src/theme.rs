#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bgra([u8; 4]);

impl Bgra {
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self([blue, green, red, alpha])
    }

    pub const fn b(&self) -> u8 {
        self.0[0]
    }

    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    pub const fn r(&self) -> u8 {
        self.0[2]
    }

    pub const fn a(&self) -> u8 {
        self.0[3]
    }
}

impl AsRef<[u8]> for Bgra {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Bgra,
    pub frame: Bgra,
    pub foreground: Bgra,
    pub accent: Bgra,
}

impl Theme {
    pub fn default() -> Self {
        Self {
            background: Bgra::from_rgba(239, 241, 245, 255), // Base
            frame: Bgra::from_rgba(172, 176, 190, 255),      // Surface2
            foreground: Bgra::from_rgba(76, 79, 105, 255),   // Text
            accent: Bgra::from_rgba(210, 15, 57, 255),       // Red
        }
    }
}
