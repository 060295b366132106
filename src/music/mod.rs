//! Per-guild playback coordination.
//!
//! This module contains the bot's only stateful machinery: the session registry
//! mapping each guild to at most one active playback session, the per-guild loop
//! policy store, the playback operations that commands dispatch into, and the
//! reactor consuming lifecycle events from the external audio node. Actual audio
//! transport and decoding live behind the [`player::PlayerService`] trait; the
//! production implementation in [`node`] only issues control calls over HTTP.

pub mod events;
pub mod loop_state;
pub mod node;
pub mod ops;
pub mod player;
pub mod reactor;
pub mod session;
pub mod track;

#[cfg(test)]
pub mod test_support;
