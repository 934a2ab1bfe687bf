//! UI Components
//!
//! Reusable Leptos components for the menu and feedback pages.

mod badge_list;
mod category_nav;
mod confetti;
mod filter_bar;
mod item_modal;
mod menu_listing;
mod notice_stack;
mod page_chrome;
mod price_tag;
mod recommendations;
mod search_bar;
mod star_rating;
mod thank_you;

pub use badge_list::BadgeList;
pub use category_nav::CategoryNav;
pub use confetti::Confetti;
pub use filter_bar::FilterBar;
pub use item_modal::ItemModal;
pub use menu_listing::MenuListing;
pub use notice_stack::NoticeStack;
pub use page_chrome::{ScrollProgress, ThemeToggle};
pub use price_tag::PriceTag;
pub use recommendations::Recommendations;
pub use search_bar::SearchBar;
pub use star_rating::StarRating;
pub use thank_you::ThankYou;
