use schema::Stat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a stat stage moved, as told to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatChange {
    Rose,
    SharplyRose,
    RoseDrastically,
    Fell,
    HarshlyFell,
    SeverelyFell,
    WontGoHigher,
    WontGoLower,
}

impl StatChange {
    /// Picks the narration for a stage change from the delta that was
    /// actually applied. A saturated stage is only reported for moves that
    /// deal no damage; `None` means nothing is said.
    pub fn describe(requested: i8, applied: i8, damaging_move: bool) -> Option<Self> {
        match applied {
            0 if requested > 0 && !damaging_move => Some(StatChange::WontGoHigher),
            0 if requested < 0 && !damaging_move => Some(StatChange::WontGoLower),
            1 => Some(StatChange::Rose),
            2 => Some(StatChange::SharplyRose),
            delta if delta > 2 => Some(StatChange::RoseDrastically),
            -1 => Some(StatChange::Fell),
            -2 => Some(StatChange::HarshlyFell),
            delta if delta < -2 => Some(StatChange::SeverelyFell),
            _ => None,
        }
    }

    fn text(self) -> &'static str {
        match self {
            StatChange::Rose => "rose!",
            StatChange::SharplyRose => "sharply rose!",
            StatChange::RoseDrastically => "rose drastically!",
            StatChange::Fell => "fell!",
            StatChange::HarshlyFell => "harshly fell!",
            StatChange::SeverelyFell => "severely fell!",
            StatChange::WontGoHigher => "won't go any higher!",
            StatChange::WontGoLower => "won't go any lower!",
        }
    }
}

/// One line of battle narration, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleMessage {
    NotEnoughPp {
        move_name: String,
    },
    MoveUsed {
        user: String,
        move_name: String,
    },
    AttackMissed {
        user: String,
    },
    CriticalHit,
    NoEffect,
    NotVeryEffective,
    SuperEffective,
    Fainted {
        name: String,
    },
    StatChanged {
        name: String,
        stat: Stat,
        change: StatChange,
    },
    ExperienceGained {
        name: String,
        amount: u32,
    },
    LevelUp {
        name: String,
        level: u8,
    },
}

impl fmt::Display for BattleMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleMessage::NotEnoughPp { move_name } => {
                write!(f, "Not enough points to perform {}", move_name)
            }
            BattleMessage::MoveUsed { user, move_name } => write!(f, "{} used {}", user, move_name),
            BattleMessage::AttackMissed { user } => write!(f, "{}'s attack missed!", user),
            BattleMessage::CriticalHit => write!(f, "Critical hit!"),
            BattleMessage::NoEffect => write!(f, "The attack had no effect!"),
            BattleMessage::NotVeryEffective => write!(f, "The attack was not very effective"),
            BattleMessage::SuperEffective => write!(f, "The attack was super effective!"),
            BattleMessage::Fainted { name } => write!(f, "{} fainted!", name),
            BattleMessage::StatChanged { name, stat, change } => {
                write!(f, "{}'s {} {}", name, stat, change.text())
            }
            BattleMessage::ExperienceGained { name, amount } => {
                write!(f, "{} gains {} experience", name, amount)
            }
            BattleMessage::LevelUp { name, level } => write!(f, "{} is now level {}!", name, level),
        }
    }
}

/// Ordered narration collected while resolving a turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageLog {
    messages: Vec<BattleMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: BattleMessage) {
        self.messages.push(message);
    }

    pub fn append(&mut self, other: MessageLog) {
        self.messages.extend(other.messages);
    }

    pub fn messages(&self) -> &[BattleMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The rendered text of every message, for a presentation layer that
    /// shows them one at a time.
    pub fn texts(&self) -> Vec<String> {
        self.messages.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for MessageLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            writeln!(f, "{}", message)?;
        }
        Ok(())
    }
}
