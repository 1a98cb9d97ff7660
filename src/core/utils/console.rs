//! Console logging macros
//!
//! On wasm32 these forward to the browser console through `web_sys::console`.
//! Native builds (unit tests, tooling) compile them down to argument
//! formatting checks with no output.
//!
//! Usage:
//! ```rust
//! use platformer_engine::console_log;
//!
//! let platforms = 3;
//! console_log!("level loaded with {} platforms", platforms);
//! ```

/// Log a formatted message to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::console::log(::std::format_args!($($arg)*))
    };
}

/// Log a formatted warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::console::warn(::std::format_args!($($arg)*))
    };
}

#[doc(hidden)]
pub fn log(args: std::fmt::Arguments<'_>) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&args.to_string().into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = args;
    }
}

#[doc(hidden)]
pub fn warn(args: std::fmt::Arguments<'_>) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&args.to_string().into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = args;
    }
}
