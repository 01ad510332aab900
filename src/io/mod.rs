pub mod fs;
pub mod png;

pub use fs::{read_to_string, write_atomic, write_atomic_with};
pub use png::save_png;
