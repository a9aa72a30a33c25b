pub mod health_controller;
pub mod minutes_controller;

pub use health_controller::health;
pub use minutes_controller::generate_minutes;
