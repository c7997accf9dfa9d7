#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use edgeconv_core as core;

#[doc(inline)]
pub use edgeconv_filter as filter;
