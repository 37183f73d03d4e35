//! Common helper UI components

mod back_button;
mod error_alert;
mod page_container;

pub use back_button::BackButton;
pub use error_alert::ErrorAlert;
pub use page_container::PageContainer;
