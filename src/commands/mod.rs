/*!
Command handlers for the CLI

This module provides the handlers invoked by the `jokebox` entrypoint,
one per front-end:

- `menu`   — Interactive terminal menu loop
- `serve`  — Web shell with per-session joke history
- `notify` — Timer-driven desktop notifier

Each handler owns exactly one `JokeClient` and issues at most one API
request at a time.
*/

pub mod menu;
pub mod notify;
pub mod serve;
