pub mod error;
pub mod feature_flags;

// Shipment form domain
pub mod draft;
pub mod parcel;

pub use error::*;
pub use feature_flags::*;

pub use draft::*;
pub use parcel::*;
