//! Pixelframes - frame and grid state management for a pixel-art animation editor
//!
//! This library provides functionality to:
//! - Model an animation document: a list of frames, each a row-major grid of
//!   color cells with a timeline interval
//! - Transition that document with a pure reducer over drawing-tool and
//!   frame/dimension actions
//! - Validate documents received from outside the reducer
//!
//! The reducer never mutates its input and never signals errors: an action
//! either produces a new document or acts as identity.

pub mod actions;
pub mod color;
pub mod grid;
pub mod models;
pub mod reducer;
pub mod validate;
