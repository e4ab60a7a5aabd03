/// Logging port used by use cases and the membership store.
/// Messages are plain text; adapters decide level routing and targets.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
