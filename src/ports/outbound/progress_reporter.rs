/// ProgressReporter port for user-facing progress and warnings
///
/// Output goes to stderr so it never mixes with a report written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress of a counted operation
    ///
    /// # Arguments
    /// * `current` - Items finished so far
    /// * `total` - Items expected
    /// * `message` - Optional label for the current item
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
