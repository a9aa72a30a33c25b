mod json_repair;
mod model_gateway;
mod retry_policy;

pub use json_repair::*;
pub use model_gateway::*;
pub use retry_policy::*;
