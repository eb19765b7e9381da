// Composition root for the registration sender.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the concrete transport and wire it into the batch handler (see main.rs).

pub mod config;
