// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the row store and notifier adapters.
// - Wire them into the use case handlers and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
