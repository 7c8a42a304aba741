//! Response types of the DexScreener API.

pub mod pair;
pub mod token;

pub use pair::*;
pub use token::*;
