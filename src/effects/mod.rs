mod scanlines;

pub use scanlines::{Scanlines, DEFAULT_ALPHA};
