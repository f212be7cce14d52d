//! Collection of generic data types shared by the withdraw form, the
//! transaction lifecycle and the wallet store.

pub mod amount;
pub mod chain;
pub mod constants;
pub mod errors;
pub mod request;
pub mod wallet;

pub mod prelude;
