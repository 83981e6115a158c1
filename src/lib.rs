//! Interplanetary network scene viewer.
//!
//! Natively, [`app`] replays a snapshot recording in the terminal. On
//! `wasm32`, [`web`] exposes `setup`, `tick`, `getCameraPosition` and `stop`
//! to a host page and draws into a canvas.

#[cfg(not(target_arch = "wasm32"))]
pub mod app;

#[cfg(target_arch = "wasm32")]
pub mod web;
