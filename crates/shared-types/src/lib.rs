pub mod config;
pub mod error;
pub mod theme;
pub mod user;
pub mod view_state;

pub use config::*;
pub use error::*;
pub use theme::*;
pub use user::*;
pub use view_state::*;
