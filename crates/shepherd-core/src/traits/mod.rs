pub mod alert_notifier;
pub mod content_provider;

pub use alert_notifier::IAlertNotifier;
pub use content_provider::IContentProvider;
