// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;

/// How hard the user judged a problem when adding it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Difficulty {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ErrorReport::new(format!("invalid difficulty: {value}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_wire_names() -> Fallible<()> {
        assert_eq!(serde_json::to_string(&Difficulty::Hard)?, "\"Hard\"");
        let d: Difficulty = serde_json::from_str("\"Easy\"")?;
        assert_eq!(d, Difficulty::Easy);
        assert!(serde_json::from_str::<Difficulty>("\"easy\"").is_err());
        Ok(())
    }

    #[test]
    fn test_parse_is_case_insensitive() -> Fallible<()> {
        assert_eq!(Difficulty::try_from("MEDIUM".to_string())?, Difficulty::Medium);
        assert_eq!(Difficulty::try_from("hard".to_string())?, Difficulty::Hard);
        assert!(Difficulty::try_from("brutal".to_string()).is_err());
        Ok(())
    }
}
