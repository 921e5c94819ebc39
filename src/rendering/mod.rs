pub mod png_io;

pub use png_io::{decode_rgb, encode_gray, read_rgb, write_gray};
