//! Win/lose state

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Playing,
    /// Touched a nebula
    Lose,
    /// Reached the finish line untouched
    Win,
}

impl Outcome {
    /// Collision beats reaching the line on the same frame
    pub fn decide(collided: bool, player_x: f32, finish_line: f32) -> Self {
        if collided {
            Outcome::Lose
        } else if player_x >= finish_line {
            Outcome::Win
        } else {
            Outcome::Playing
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }

    /// End-of-run banner text
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Playing => None,
            Outcome::Lose => Some("Game Over!"),
            Outcome::Win => Some("You win!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide() {
        assert_eq!(Outcome::decide(false, 100.0, 200.0), Outcome::Playing);
        assert_eq!(Outcome::decide(false, 200.0, 200.0), Outcome::Win);
        assert_eq!(Outcome::decide(true, 100.0, 200.0), Outcome::Lose);
    }

    #[test]
    fn test_collision_takes_precedence() {
        assert_eq!(Outcome::decide(true, 300.0, 200.0), Outcome::Lose);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Outcome::Playing.message(), None);
        assert!(Outcome::Lose.is_over());
        assert_eq!(Outcome::Win.message(), Some("You win!"));
    }
}
