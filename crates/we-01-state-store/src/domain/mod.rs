pub mod codec;
pub mod errors;
pub mod record;
pub mod store;

pub use codec::*;
pub use errors::*;
pub use record::*;
pub use store::*;
