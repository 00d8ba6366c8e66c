pub mod process_environment;
pub mod terminal_interaction;
pub mod xml_parser;

#[cfg(test)]
pub mod test_helpers;

pub use process_environment::ProcessEnvironment;
pub use terminal_interaction::TerminalInteraction;
pub use xml_parser::XmlConfigurationParser;
