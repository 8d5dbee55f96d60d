//! Feature-gated console logging.
//!
//! With `esp32-log` enabled messages go to `esp_println`, otherwise the
//! arguments are type-checked and discarded.

macro_rules! log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        {
            esp_println::println!($($arg)*);
        }
        #[cfg(not(feature = "esp32-log"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub(crate) use log;
