//! New-note template rendering.

pub mod engine;

pub use engine::{moment_to_strftime, render_new_note};
