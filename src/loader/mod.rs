mod controller;
mod state;

pub use controller::LoadController;
pub use state::LoadState;
