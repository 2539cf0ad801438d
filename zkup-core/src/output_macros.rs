//! Output macros for the zkup CLI.
//!
//! User-facing lines go through these macros so every stage prints with the
//! same prefixes. Diagnostic output belongs in `tracing`, not here.

/// Fill `{key}` placeholders in a message template.
#[macro_export]
macro_rules! msg_format {
    ($template:expr) => {
        $template.to_string()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut result = $template.to_string();
            $(
                result = result.replace(&format!("{{{}}}", stringify!($key)), &$value.to_string());
            )+
            result
        }
    };
}

#[macro_export]
macro_rules! zk_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! zk_error {
    ($($arg:tt)*) => {
        eprintln!("✗ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! zk_error_hint {
    ($($arg:tt)*) => {
        eprintln!("💡 {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! zk_success {
    ($($arg:tt)*) => {
        eprintln!("✓ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! zk_info {
    ($($arg:tt)*) => {
        eprintln!("ℹ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! zk_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! zk_progress {
    ($($arg:tt)*) => {
        eprintln!("▶ {}", format!($($arg)*));
    };
}
