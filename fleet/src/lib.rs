pub mod call;
pub mod config;
pub mod direction;
pub mod dispatcher;
pub mod elevator;
pub mod error;
pub mod fleet;
pub mod motion;
pub mod service;

pub use call::Call;
pub use config::Config;
pub use direction::Direction;
pub use elevator::Elevator;
pub use error::{ConfigError, ServiceError};
pub use fleet::{Fleet, Reconfiguration};
pub use motion::Transition;
pub use service::FleetHandle;
