//! Reading player save files off disk and pulling caught Pokemon out of them.

pub mod archive;
pub mod extract;
pub mod scanner;

pub use extract::{AcquisitionSet, TextExtractor};
pub use scanner::scan;
