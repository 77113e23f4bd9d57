//! Caesar - shift cipher decoding with automatic shift detection
//!
//! The library exposes two core operations:
//!
//! - [`transform`] applies a signed shift to the ASCII letters of a text
//! - [`analyze`] scores all 26 possible shifts against English letter
//!   frequencies and picks the most plausible one
//!
//! Everything else (statistics, reports, config, file helpers) exists to
//! serve callers such as the `caesar` binary.
//!
//! # Example
//!
//! ```
//! use caesar::{analyze, transform, DecodeOptions};
//!
//! let plain = transform("Khoor, Zruog!", -3, &DecodeOptions::default());
//! assert_eq!(plain, "Hello, World!");
//!
//! let analysis = analyze("Wkh vxq lv vklqlqj dqg wkh elugv duh vlqjlqj lq wkh wuhhv wrgdb");
//! assert_eq!(analysis.best().shift, 3);
//! ```

pub mod analysis;
pub mod cipher;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod reporters;

pub use analysis::{analyze, auto_decode, Analysis, AutoDecode, ShiftCandidate, TextStatistics};
pub use cipher::{decode, encode, normalize_shift, transform, DecodeOptions};
pub use error::{ConfigError, ResourceAccessError};
