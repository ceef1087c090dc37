pub mod health;
pub use self::health::health;

pub mod page;
pub use self::page::{clear, index, refresh, search};

pub mod state;
pub use self::state::state;
