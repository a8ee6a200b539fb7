pub mod export;
pub mod report;
pub mod word_frequency;

pub use export::*;
pub use report::*;
pub use word_frequency::*;
