mod folders;
mod translate;

pub use folders::*;
pub use translate::*;
