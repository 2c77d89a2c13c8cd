#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pixmat_image as image;

#[doc(inline)]
pub use pixmat_imgproc as imgproc;

#[doc(inline)]
pub use pixmat_io as io;
