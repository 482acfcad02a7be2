// Every event goes to the `reorderable` target. Without the `tracing` feature the macros expand
// to nothing.

#[cfg(feature = "tracing")]
macro_rules! rlog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "reorderable", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rlog {
    ($level:ident, $($tt:tt)*) => {};
}

/// Per-move detail.
macro_rules! rtrace {
    ($($tt:tt)*) => {
        rlog!(trace, $($tt)*)
    };
}

/// Session lifecycle and commits.
macro_rules! rdebug {
    ($($tt:tt)*) => {
        rlog!(debug, $($tt)*)
    };
}

/// Ignored input and consistency faults.
macro_rules! rwarn {
    ($($tt:tt)*) => {
        rlog!(warn, $($tt)*)
    };
}
