pub mod fallback;
pub mod open_er_api;
pub mod remote;
pub mod util;
pub mod world_bank;

pub use fallback::{FallbackProvider, StaticProvider};
pub use remote::RemoteProvider;
