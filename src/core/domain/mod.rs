//! Domain types.

mod cipher_type;
mod request;
mod result;

pub use cipher_type::{CipherType, Mode, Standard};
pub use request::{Field, Operation, SymmetricRequest};
pub use result::{Encoding, SymmetricResult};
