//! Wave simulation for a fixed-screen alien-invaders game: the
//! player's ship, a fleet marching in lockstep, and the bolts both
//! sides fire.  Rendering and event handling live in the binary; the
//! library only reports drawable shapes and answers state queries.

pub mod config;
pub mod entities;
pub mod fleet;
pub mod input;
pub mod wave;
