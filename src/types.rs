mod errors;
mod reserve;

pub use errors::*;
pub use reserve::ReserveProxy;
pub use reserve::reserve;
