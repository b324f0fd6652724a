pub mod error;
pub mod invoker;
pub mod workdir;

pub use error::*;
pub use invoker::*;
pub use workdir::*;
