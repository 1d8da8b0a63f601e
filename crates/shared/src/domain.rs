use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident, $repr:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub $repr);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(CardId, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arcana {
    Major,
    Minor(Suit),
}

/// A single entry of the fixed 78-card catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub id: CardId,
    pub name: &'static str,
    pub arcana: Arcana,
}

impl Card {
    pub const fn major(id: u8, name: &'static str) -> Self {
        Self {
            id: CardId(id),
            name,
            arcana: Arcana::Major,
        }
    }

    pub const fn minor(id: u8, name: &'static str, suit: Suit) -> Self {
        Self {
            id: CardId(id),
            name,
            arcana: Arcana::Minor(suit),
        }
    }
}

/// The ten Celtic Cross positions, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    PresentSituation,
    Challenge,
    DistantPast,
    RecentPast,
    PossibleOutcome,
    ImmediateFuture,
    YourApproach,
    ExternalInfluences,
    HopesAndFears,
    FinalOutcome,
}

impl Position {
    pub const COUNT: usize = 10;

    pub const ALL: [Position; Self::COUNT] = [
        Position::PresentSituation,
        Position::Challenge,
        Position::DistantPast,
        Position::RecentPast,
        Position::PossibleOutcome,
        Position::ImmediateFuture,
        Position::YourApproach,
        Position::ExternalInfluences,
        Position::HopesAndFears,
        Position::FinalOutcome,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::PresentSituation => "Present Situation",
            Position::Challenge => "Challenge/Cross",
            Position::DistantPast => "Distant Past/Root",
            Position::RecentPast => "Recent Past",
            Position::PossibleOutcome => "Possible Outcome",
            Position::ImmediateFuture => "Immediate Future",
            Position::YourApproach => "Your Approach",
            Position::ExternalInfluences => "External Influences",
            Position::HopesAndFears => "Hopes & Fears",
            Position::FinalOutcome => "Final Outcome",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card bound to the spread position it was drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    pub position: Position,
    pub card: Card,
}
