// Standalone components used by the shipment form
pub mod button;
pub mod card;
pub mod form;
pub mod input;
pub mod page_header;
pub mod textarea;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use form::*;
pub use input::*;
pub use page_header::*;
pub use textarea::*;
