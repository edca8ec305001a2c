pub mod client;
pub mod image;
pub mod request;

pub use client::{FetchError, ImageClient};
pub use image::{ImageDescriptor, RawImage};
