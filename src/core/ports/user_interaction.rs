/// Interface for user-facing output
///
/// This trait abstracts how command results reach the user, allowing for
/// different implementations (e.g., terminal, mock for testing).
pub trait UserInteraction: Send + Sync {
    /// Prints a message to the user
    ///
    /// # Arguments
    /// * `message` - The message to display
    fn print(&self, message: &str);

    /// Prints an error message to the user
    ///
    /// # Arguments
    /// * `message` - The error message to display
    fn print_error(&self, message: &str);
}
