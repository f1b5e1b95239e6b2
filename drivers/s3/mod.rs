//! S3对象存储驱动

mod driver;

pub use driver::S3Store;
