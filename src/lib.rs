//! JVDT-7 profile explorer.
//!
//! [`scoring`] turns seven 0-100 axis scores into a normalized vector, a
//! seven-letter type code and a Virtue Ladder profile. [`radar`] projects the
//! same scores onto a closed polar polygon and a CSV table. The rest is the
//! `jvdt` binary's plumbing: config, output, logging and the terminal explorer.

pub mod config;
pub mod logging;
pub mod output;
pub mod radar;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;
