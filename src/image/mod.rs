pub mod f32;
pub mod io;
pub mod resize;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::resize::resize_bilinear;
pub use self::traits::{ImageView, Rows};
pub use self::u8::ImageU8;
