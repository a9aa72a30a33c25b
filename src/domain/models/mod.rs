mod action_item;
mod completion;
mod meeting_minutes;
mod priority;
mod topic;

pub use action_item::*;
pub use completion::*;
pub use meeting_minutes::*;
pub use priority::*;
pub use topic::*;
