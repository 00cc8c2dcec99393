//! Host runtime seam: bot handles and the actions issued through them

use serde::{Deserialize, Serialize};

use crate::core::types::BotId;
use crate::hex::Position;

/// The one action a bot takes in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Move { x: i32, y: i32 },
    Cannon { x: i32, y: i32 },
    Radar { x: i32, y: i32 },
}

impl Action {
    pub fn target(&self) -> Position {
        match *self {
            Self::Move { x, y } | Self::Cannon { x, y } | Self::Radar { x, y } => Position::new(x, y),
        }
    }
}

/// A controlled bot as exposed by the host runtime.
///
/// Commands are fire-and-forget; the engine never reads a result back.
pub trait BotHandle {
    fn bot_id(&self) -> BotId;
    fn x(&self) -> i32;
    fn y(&self) -> i32;

    fn radar(&mut self, x: i32, y: i32);
    fn cannon(&mut self, x: i32, y: i32);
    fn move_to(&mut self, x: i32, y: i32);

    fn position(&self) -> Position {
        Position::new(self.x(), self.y())
    }
}

/// Issue `action` through `bot`
pub fn execute<B: BotHandle + ?Sized>(bot: &mut B, action: Action) {
    match action {
        Action::Move { x, y } => bot.move_to(x, y),
        Action::Cannon { x, y } => bot.cannon(x, y),
        Action::Radar { x, y } => bot.radar(x, y),
    }
}

/// Bot handle that stores the last issued action instead of sending it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingBot {
    #[serde(rename = "botId")]
    pub bot_id: BotId,
    pub x: i32,
    pub y: i32,
    #[serde(skip)]
    pub action: Option<Action>,
}

impl RecordingBot {
    pub fn new(bot_id: BotId, x: i32, y: i32) -> Self {
        Self {
            bot_id,
            x,
            y,
            action: None,
        }
    }

    /// Take the recorded action, leaving the bot ready for the next round
    pub fn take_action(&mut self) -> Option<Action> {
        self.action.take()
    }
}

impl BotHandle for RecordingBot {
    fn bot_id(&self) -> BotId {
        self.bot_id
    }

    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn radar(&mut self, x: i32, y: i32) {
        self.action = Some(Action::Radar { x, y });
    }

    fn cannon(&mut self, x: i32, y: i32) {
        self.action = Some(Action::Cannon { x, y });
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.action = Some(Action::Move { x, y });
    }
}
