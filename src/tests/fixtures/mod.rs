pub mod state;
pub mod submissions;
