//! Domain types of the reflow pipeline.
//!
//! Data flows through these types in one direction:
//! [`Detection`] → [`RegionDescriptor`] → [`Line`] → [`LineBlock`] → [`ReconstructedText`].

pub mod detection;
pub mod line;
pub mod reconstructed;
pub mod region;

pub use detection::Detection;
pub use line::Line;
pub use reconstructed::{LineBlock, ReconstructedText};
pub use region::RegionDescriptor;
