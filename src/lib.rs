pub mod errors;
pub mod sequence;
pub mod aligner;
pub mod io;
