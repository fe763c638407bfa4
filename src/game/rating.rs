/// Tier of an end-of-round score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Novice,
    Hungry,
    Excellent,
    Fabulous,
    TopOfTheEarth,
    Passionate,
}

impl Rating {
    pub fn for_score(score: usize) -> Self {
        match score {
            0..=5 => Rating::Novice,
            6..=10 => Rating::Hungry,
            11..=15 => Rating::Excellent,
            16..=20 => Rating::Fabulous,
            21..=50 => Rating::TopOfTheEarth,
            _ => Rating::Passionate,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rating::Novice => "Well Tried! Just Keep Practising",
            Rating::Hungry => "Good! But snake is still hungry",
            Rating::Excellent => "Excellent! Just a little more to go",
            Rating::Fabulous => "Fabulous!!! Eligible for Level 2",
            Rating::TopOfTheEarth => "Wow! I am on top of the Earth",
            Rating::Passionate => "Haha... Snakes are my passion!!",
        }
    }

    /// The top two tiers get an extra "eligible for level 2" banner
    pub fn shows_banner(self) -> bool {
        matches!(self, Rating::TopOfTheEarth | Rating::Passionate)
    }
}
