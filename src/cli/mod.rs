pub mod args;
pub mod pipeline;

pub use args::{Args, FilterSelection};
pub use pipeline::Pipeline;
