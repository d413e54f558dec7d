pub mod histogram;

pub use histogram::{Histogram, terminal_width};
