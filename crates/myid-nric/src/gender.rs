use serde::{Deserialize, Serialize};

/// Gender encoded by the last digit of the gender/serial code.
///
/// Odd digits are issued to males, even digits to females. This is a
/// registration convention and is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Derive the gender from a gender/serial code.
    ///
    /// Returns `None` if the code is empty or does not end in an ASCII digit.
    pub fn from_serial_code(code: &str) -> Option<Self> {
        let last = code.bytes().last().filter(u8::is_ascii_digit)?;
        Some(if (last - b'0') % 2 == 1 {
            Self::Male
        } else {
            Self::Female
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
