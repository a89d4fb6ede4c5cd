//! UI Components
//!
//! Leptos components for the landing page, the dare board and its cards.

mod landing;
mod dare_board;
mod dare_card;
mod error_banner;

pub use landing::Landing;
pub use dare_board::DareBoard;
pub use dare_card::DareCard;
pub use error_banner::ErrorBanner;
