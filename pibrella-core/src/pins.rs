//! Pin-Zuordnung des Pibrella-Boards
//!
//! Alle Anschlüsse des Boards mit Name und GPIO-Nummer.
//! Die Werte sind Konstanten und werden zur Laufzeit nie verändert.
//!
//! `gpio()` liefert die BCM-Nummer (Broadcom), NICHT die wiringPi/Pi4J-Adresse.
//! Beispiel: die grüne LED ist BCM 4, in wiringPi-Zählung Pin 7.

use core::fmt;

/// Ein physischer Anschluss des Pibrella-Boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PibrellaPin {
    InputA,
    InputB,
    InputC,
    InputD,
    OutputE,
    OutputF,
    OutputG,
    OutputH,
    LedRed,
    LedYellow,
    LedGreen,
    Button,
    Buzzer,
}

impl PibrellaPin {
    /// Alle Anschlüsse in Board-Reihenfolge
    pub const ALL: [PibrellaPin; 13] = [
        PibrellaPin::InputA,
        PibrellaPin::InputB,
        PibrellaPin::InputC,
        PibrellaPin::InputD,
        PibrellaPin::OutputE,
        PibrellaPin::OutputF,
        PibrellaPin::OutputG,
        PibrellaPin::OutputH,
        PibrellaPin::LedRed,
        PibrellaPin::LedYellow,
        PibrellaPin::LedGreen,
        PibrellaPin::Button,
        PibrellaPin::Buzzer,
    ];

    /// GPIO-Nummer (BCM) des Anschlusses
    ///
    /// ```
    /// # use pibrella_core::PibrellaPin;
    /// assert_eq!(PibrellaPin::Buzzer.gpio(), 18);
    /// ```
    pub const fn gpio(self) -> u8 {
        match self {
            PibrellaPin::InputA => 9,
            PibrellaPin::InputB => 7,
            PibrellaPin::InputC => 8,
            PibrellaPin::InputD => 10,
            PibrellaPin::OutputE => 22,
            PibrellaPin::OutputF => 23,
            PibrellaPin::OutputG => 24,
            PibrellaPin::OutputH => 25,
            PibrellaPin::LedRed => 27,
            PibrellaPin::LedYellow => 17,
            PibrellaPin::LedGreen => 4,
            PibrellaPin::Button => 11,
            PibrellaPin::Buzzer => 18,
        }
    }

    /// Lesbarer Name des Anschlusses
    pub const fn name(self) -> &'static str {
        match self {
            PibrellaPin::InputA => "Input A",
            PibrellaPin::InputB => "Input B",
            PibrellaPin::InputC => "Input C",
            PibrellaPin::InputD => "Input D",
            PibrellaPin::OutputE => "Output E",
            PibrellaPin::OutputF => "Output F",
            PibrellaPin::OutputG => "Output G",
            PibrellaPin::OutputH => "Output H",
            PibrellaPin::LedRed => "Red LED",
            PibrellaPin::LedYellow => "Yellow LED",
            PibrellaPin::LedGreen => "Green LED",
            PibrellaPin::Button => "Button",
            PibrellaPin::Buzzer => "Buzzer",
        }
    }

    /// Sucht den Anschluss zu einer GPIO-Nummer
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|pin| pin.gpio() == gpio)
    }
}

impl fmt::Display for PibrellaPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PibrellaPin {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} (GPIO {})", self.name(), self.gpio())
    }
}
