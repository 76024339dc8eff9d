//! Pure data structures shared by the catalog, the cart, checkout and the courier board.

pub mod checkout;
pub mod courier;
pub mod menu;

pub use checkout::*;
pub use courier::*;
pub use menu::*;
