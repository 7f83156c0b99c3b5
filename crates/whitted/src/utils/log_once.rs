//! Error logging for hot paths, one call per ray, where a repeated anomaly would flood the log.

/// Logs an error the first time its call site is reached, later calls are silent.
#[macro_export]
macro_rules! error_once {
    ($($arg:tt)+) => {{
        static REPORTED: std::sync::Once = std::sync::Once::new();
        REPORTED.call_once(|| log::error!($($arg)+));
    }};
}
