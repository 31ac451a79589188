//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: tracing::LogFormat) {
    tracing::init(format);
}

/// Subscriber configuration (filters, formatters).
pub mod tracing;

pub use self::tracing::LogFormat;
