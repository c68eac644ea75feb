mod renderer;

pub use renderer::{render, MAX_ITEMS};
