pub mod decode;
pub mod interpolate;
pub mod model;

pub use decode::{merge_fragments, resolve};
pub use interpolate::InterpolateContext;
pub use model::{Config, DEFAULT_OUTPUT_PATH, PackerConfig};
