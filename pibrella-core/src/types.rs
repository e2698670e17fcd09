//! LED-Zuordnung des Pibrella-Boards
//!
//! Die drei LEDs (Grün, Gelb, Rot) sind fest an je einen Anschluss gebunden.

use core::fmt;

use crate::pins::PibrellaPin;

/// Eine der drei LEDs auf dem Pibrella-Board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PibrellaLed {
    Green,
    Yellow,
    Red,
}

/// Fehler beim Parsen eines LED-Namens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownLed;

impl PibrellaLed {
    /// Alle LEDs in Board-Reihenfolge
    pub const ALL: [PibrellaLed; 3] = [PibrellaLed::Green, PibrellaLed::Yellow, PibrellaLed::Red];

    /// Anschluss, an dem die LED hängt
    ///
    /// ```
    /// # use pibrella_core::{PibrellaLed, PibrellaPin};
    /// assert_eq!(PibrellaLed::Green.pin(), PibrellaPin::LedGreen);
    /// ```
    pub const fn pin(self) -> PibrellaPin {
        match self {
            PibrellaLed::Green => PibrellaPin::LedGreen,
            PibrellaLed::Yellow => PibrellaPin::LedYellow,
            PibrellaLed::Red => PibrellaPin::LedRed,
        }
    }

    /// GPIO-Nummer des Anschlusses
    pub const fn gpio(self) -> u8 {
        self.pin().gpio()
    }

    /// Name des Anschlusses
    pub const fn name(self) -> &'static str {
        self.pin().name()
    }

    /// Sucht die LED zu einer GPIO-Nummer
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|led| led.gpio() == gpio)
    }
}

impl core::convert::TryFrom<&str> for PibrellaLed {
    type Error = UnknownLed;

    /// Akzeptiert den Bezeichner ("GREEN", "yellow", ...) oder den Pin-Namen ("Red LED")
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        let tagged = [
            ("GREEN", PibrellaLed::Green),
            ("YELLOW", PibrellaLed::Yellow),
            ("RED", PibrellaLed::Red),
        ];
        tagged
            .into_iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(name))
            .map(|(_, led)| led)
            .or_else(|| Self::ALL.into_iter().find(|led| led.name() == name))
            .ok_or(UnknownLed)
    }
}

impl fmt::Display for PibrellaLed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PibrellaLed {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "PibrellaLed {{ pin: {} }}", self.pin())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for UnknownLed {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "UnknownLed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_is_case_insensitive() {
        assert_eq!(PibrellaLed::try_from("yellow"), Ok(PibrellaLed::Yellow));
        assert_eq!(PibrellaLed::try_from("Red LED"), Ok(PibrellaLed::Red));
        assert_eq!(PibrellaLed::try_from("Blau"), Err(UnknownLed));
    }
}
