// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive client.
//
// Module responsibilities:
// - `request`: Pure construction of request descriptors from
//   user-entered tokens, plus the DELETE status-to-message mapping.
//   Contains no I/O, so the whole decision tree is unit-testable.
// - `api`: Executes request descriptors over HTTP (blocking reqwest)
//   against a configurable base URL.
// - `ui`: Implements the terminal prompt sequence and delegates to
//   `request` and `api`.
//
// Keeping this separation means the prompt branching can be tested
// without simulating a terminal or a server.
pub mod api;
pub mod request;
pub mod ui;
