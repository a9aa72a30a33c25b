mod generate_minutes;
mod minutes_coercion;
mod minutes_prompt;

pub use generate_minutes::*;
pub use minutes_coercion::*;
pub use minutes_prompt::*;
