//! View-state module.
//!
//! - `screen`: `Screen` and the navigable `Destination`s
//! - `controller`: `ViewController`, `View` and `ViewAction`

mod controller;
mod screen;

pub use controller::{NavigationError, View, ViewAction, ViewController};
pub use screen::{Destination, Screen};
