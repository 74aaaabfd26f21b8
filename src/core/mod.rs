pub mod process;

pub use process::{Processed, process};
