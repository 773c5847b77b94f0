//! dcc-ui - Display types, stores, and pure view components for the DCC
//! submission admin dashboard
//!
//! Nothing here fetches data. Pages in `dcc-web` own the stores and pass
//! callbacks down; the same views render fixture data just as well.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
