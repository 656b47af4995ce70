pub mod balance;
pub mod delivery;
pub mod upload;

pub use balance::*;
pub use delivery::*;
pub use upload::*;
