pub mod environment;
pub mod parser;
pub mod user_interaction;

pub use environment::{Environment, HostLibrary};
pub use parser::{ParseError, ParseOutcome, ReadError, StructuredParser};
pub use user_interaction::UserInteraction;
