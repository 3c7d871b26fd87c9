use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{OutdatedFormatter, TreeFormatter};

/// Factory for creating tree and outdated-report formatters
///
/// Belongs in the application layer as it selects infrastructure adapters
/// based on the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a dependency tree formatter for the specified output format
    ///
    /// # Examples
    /// ```
    /// use npm_deptree::application::dto::OutputFormat;
    /// use npm_deptree::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create_tree_formatter(OutputFormat::Json);
    /// ```
    pub fn create_tree_formatter(format: OutputFormat) -> Box<dyn TreeFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::new()),
        }
    }

    /// Creates an outdated-report formatter for the specified output format
    pub fn create_outdated_formatter(format: OutputFormat) -> Box<dyn OutdatedFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use npm_deptree::application::dto::OutputFormat;
    /// use npm_deptree::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Text => "📝 Generating text output...",
        }
    }
}
