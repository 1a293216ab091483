pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;
pub mod session;

pub use error::MonitorError;
pub use session::SessionUser;
