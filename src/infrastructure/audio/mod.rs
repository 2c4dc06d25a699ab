//! Third-party audio hosting.

pub mod drive;

pub use drive::DriveAudioSource;
