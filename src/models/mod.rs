mod chat;
mod news;
mod position;
mod returns;

pub use chat::{ChatMessage, ChatSender};
pub use news::{NewsCandidate, NewsRow, NEWS_DISPLAY_COLUMNS};
pub use position::{PositionRow, POSITION_DISPLAY_COLUMNS};
pub use returns::{
    PeriodicReturnRow, PeriodicReturnsRequest, PeriodicReturnsTable, ReturnPeriod, ReturnType,
    DEFAULT_COMPARATOR,
};
