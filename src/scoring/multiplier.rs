//! Team-name handicap: favourites score less, relegation candidates more.

/// A rational multiplier, kept exact so rounding never drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplier {
    num: i64,
    den: i64,
}

const FAVOURITES: &[&str] = &["arsenal", "liverpool", "manchester city", "man city"];
const UNDERDOGS: &[&str] = &[
    "ipswich town",
    "ipswich",
    "leicester city",
    "leicester",
    "southampton",
];

impl Multiplier {
    pub const FAVOURITE: Multiplier = Multiplier { num: 4, den: 5 };
    pub const UNDERDOG: Multiplier = Multiplier { num: 5, den: 4 };
    pub const NEUTRAL: Multiplier = Multiplier { num: 1, den: 1 };

    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// `raw × multiplier`, rounded half-up (42.5 → 43, -2.5 → -2).
    pub fn apply(&self, raw: i64) -> i64 {
        (2 * raw * self.num + self.den).div_euclid(2 * self.den)
    }
}

/// Case-insensitive lookup of a team's multiplier; unknown names are neutral.
pub fn team_multiplier(team_name: &str) -> Multiplier {
    let name = team_name.trim().to_lowercase();
    if FAVOURITES.contains(&name.as_str()) {
        Multiplier::FAVOURITE
    } else if UNDERDOGS.contains(&name.as_str()) {
        Multiplier::UNDERDOG
    } else {
        Multiplier::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_aliases() {
        assert_eq!(team_multiplier("ARSENAL"), Multiplier::FAVOURITE);
        assert_eq!(team_multiplier("Man City"), Multiplier::FAVOURITE);
        assert_eq!(team_multiplier(" Leicester "), Multiplier::UNDERDOG);
        assert_eq!(team_multiplier("Brentford"), Multiplier::NEUTRAL);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(Multiplier::FAVOURITE.apply(34), 27); // 27.2
        assert_eq!(Multiplier::UNDERDOG.apply(34), 43); // 42.5
        assert_eq!(Multiplier::UNDERDOG.apply(2), 3); // 2.5
        assert_eq!(Multiplier::FAVOURITE.apply(0), 0);
        assert_eq!(Multiplier::NEUTRAL.apply(17), 17);
    }
}
