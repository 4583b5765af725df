#[macro_export]
macro_rules! debug {
    ($context:expr, $($argument:tt)+) => {
        if $context.options().debug {
            $crate::log!($context, $($argument)+);
        }
    };
}

#[macro_export]
macro_rules! warning {
    ($context:expr, $($argument:tt)+) => {
        $crate::log!($context, "warning: {}", format!($($argument)+));
    };
}

#[macro_export]
macro_rules! log {
    ($context:expr, $($argument:tt)+) => {
        // Console failures are dropped.
        let _ = $context
            .console()
            .lock()
            .await
            .write_line(&("edagen: ".to_owned() + &format!($($argument)+)))
            .await;
    };
}
