pub mod alloc;
pub mod panic;
#[cfg(feature = "corex")]
pub mod result;
#[cfg(any(feature = "fs", feature = "terminal"))]
pub mod syscall;
