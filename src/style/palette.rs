use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::Rgba8,
    error::{FunnelError, FunnelResult},
};

/// Colours used when the caller does not supply a palette.
pub const DEFAULT_COLORS: [Rgba8; 5] = [
    Rgba8::rgb(0x5e, 0xbc, 0xac),
    Rgba8::rgb(0x1c, 0x90, 0xdc),
    Rgba8::rgb(0x0e, 0x61, 0xcf),
    Rgba8::rgb(0x36, 0x29, 0xc7),
    Rgba8::rgb(0xc9, 0x5a, 0x74),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// What to do when there are more segments than palette entries.
pub enum PaletteOverflow {
    /// Wrap around to the first colour.
    #[default]
    Cycle,
    /// Fail with [`FunnelError::Palette`].
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Ordered segment colours; segment `i` is filled with entry `i`.
pub struct Palette {
    pub colors: Vec<Rgba8>,
    #[serde(default)]
    pub overflow: PaletteOverflow,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
            overflow: PaletteOverflow::Cycle,
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Rgba8>, overflow: PaletteOverflow) -> Self {
        Self { colors, overflow }
    }

    /// Build a palette from `#RRGGBB` / `#RRGGBBAA` strings.
    pub fn from_hex<S: AsRef<str>>(
        colors: &[S],
        overflow: PaletteOverflow,
    ) -> FunnelResult<Self> {
        let colors = colors
            .iter()
            .map(|c| parse_hex(c.as_ref()).map_err(FunnelError::palette))
            .collect::<FunnelResult<Vec<_>>>()?;
        Ok(Self { colors, overflow })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn validate(&self) -> FunnelResult<()> {
        if self.colors.is_empty() {
            return Err(FunnelError::palette("palette must contain at least one colour"));
        }
        Ok(())
    }

    /// Colour for segment `index` according to the overflow policy.
    pub fn color_for(&self, index: usize) -> FunnelResult<Rgba8> {
        self.validate()?;
        if let Some(c) = self.colors.get(index) {
            return Ok(*c);
        }
        match self.overflow {
            PaletteOverflow::Cycle => {
                tracing::debug!(index, len = self.colors.len(), "palette wraps around");
                Ok(self.colors[index % self.colors.len()])
            }
            PaletteOverflow::Error => Err(FunnelError::palette(format!(
                "segment {index} has no colour; palette holds {}",
                self.colors.len()
            ))),
        }
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Rgba8::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Rgba8::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Rgba8::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

pub(crate) fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err(format!("invalid hex colour \"{s}\""));
    }
    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/palette.rs"]
mod tests;
