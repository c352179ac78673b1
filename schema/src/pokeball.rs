use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PokeballId(pub u16);

/// A capture device from the pokeball catalogue. `catch_rate` multiplies
/// the target's capture rate (1.0 for a standard ball).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokeball {
    pub id: PokeballId,
    pub name: String,
    pub catch_rate: f64,
    pub display_char: char,
}

impl Pokeball {
    pub fn new(id: PokeballId, name: impl Into<String>, catch_rate: f64, display_char: char) -> Self {
        Self {
            id,
            name: name.into(),
            catch_rate,
            display_char,
        }
    }
}

impl fmt::Display for Pokeball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.display_char, self.name)
    }
}
