pub mod button;
pub mod card;
pub mod theme_toggle;
pub mod toast;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use theme_toggle::*;
pub use toast::*;
