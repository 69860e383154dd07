pub mod f32;

pub use self::f32::ImageF32;
