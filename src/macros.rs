// ============================================================================
// Aurora - 输出宏
// ============================================================================
//
// 文件: src/macros.rs
// 职责: printf 风格的快捷输出宏
// 边界:
//   - ✅ 默认实例与指定实例两种调用形式
//   - ✅ 条件输出的参数惰性求值
//   - ❌ 不应包含行组装逻辑
//
// ============================================================================

// 每个宏都接受两种形式：
//   info!("{} ready", name)        -> 默认实例
//   info!(notifier => "{}", name)  -> 指定实例

#[macro_export]
macro_rules! debug {
    ($n:expr => $($arg:tt)+) => { $n.debug(::std::format_args!($($arg)+)) };
    ($($arg:tt)+) => { $crate::core::global::debug(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! info {
    ($n:expr => $($arg:tt)+) => { $n.info(::std::format_args!($($arg)+)) };
    ($($arg:tt)+) => { $crate::core::global::info(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! notice {
    ($n:expr => $($arg:tt)+) => { $n.notice(::std::format_args!($($arg)+)) };
    ($($arg:tt)+) => { $crate::core::global::notice(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! warn {
    ($n:expr => $($arg:tt)+) => { $n.warn(::std::format_args!($($arg)+)) };
    ($($arg:tt)+) => { $crate::core::global::warn(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! error {
    ($n:expr => $($arg:tt)+) => { $n.error(::std::format_args!($($arg)+)) };
    ($($arg:tt)+) => { $crate::core::global::error(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! alert {
    ($n:expr => $($arg:tt)+) => { $n.alert(::std::format_args!($($arg)+)) };
    ($($arg:tt)+) => { $crate::core::global::alert(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! critical {
    ($n:expr => $($arg:tt)+) => { $n.critical(::std::format_args!($($arg)+)) };
    ($($arg:tt)+) => { $crate::core::global::critical(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! success {
    ($n:expr => $($arg:tt)+) => { $n.success(::std::format_args!($($arg)+)) };
    ($($arg:tt)+) => { $crate::core::global::success(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! failure {
    ($n:expr => $($arg:tt)+) => { $n.failure(::std::format_args!($($arg)+)) };
    ($($arg:tt)+) => { $crate::core::global::failure(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! fatal {
    ($n:expr => $($arg:tt)+) => { $n.fatal(::std::format_args!($($arg)+)) };
    ($($arg:tt)+) => { $crate::core::global::fatal(::std::format_args!($($arg)+)) };
}

/// 带时间戳输出：`logf!(Level::Info, "...")` 或 `logf!(n => Level::Info, "...")`
#[macro_export]
macro_rules! logf {
    ($n:expr => $level:expr, $($arg:tt)+) => {
        $n.logf($level, ::std::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::core::global::logf($level, ::std::format_args!($($arg)+))
    };
}

/// 条件输出；条件为假时格式参数不会被求值
#[macro_export]
macro_rules! when {
    ($n:expr => $cond:expr, $level:expr, $($arg:tt)+) => {
        if $cond {
            $n.inlinef($level, ::std::format_args!($($arg)+))
        }
    };
    ($cond:expr, $level:expr, $($arg:tt)+) => {
        if $cond {
            $crate::core::global::inlinef($level, ::std::format_args!($($arg)+))
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::models::level::Level;
    use crate::utils::colors::strip_ansi;
    use crate::utils::sink::MemorySink;
    use crate::Notifier;
    use std::cell::Cell;

    #[test]
    fn macros_route_to_the_given_notifier() {
        let sink = MemorySink::new();
        let n = Notifier::from_writer(sink.clone());
        crate::info!(n => "{} + {} = {}", 1, 2, 3);
        crate::failure!(n.with("job") => "exit {}", 2);
        assert_eq!(
            strip_ansi(&sink.contents()),
            "[✔] 1 + 2 = 3\n[✘] [job] ✗ exit 2\n"
        );
    }

    #[test]
    fn logf_macro_includes_timestamp() {
        let sink = MemorySink::new();
        let n = Notifier::from_writer(sink.clone());
        crate::logf!(n => Level::Notice, "disk at {}%", 91);
        let output = strip_ansi(&sink.contents());
        assert!(output.starts_with("[⚑] "));
        assert!(output.ends_with(" disk at 91%\n"));
    }

    #[test]
    fn when_macro_skips_argument_evaluation() {
        let sink = MemorySink::new();
        let n = Notifier::from_writer(sink.clone());
        let evaluated = Cell::new(0);
        let expensive = || {
            evaluated.set(evaluated.get() + 1);
            "value"
        };

        crate::when!(n => false, Level::Info, "{}", expensive());
        assert_eq!(evaluated.get(), 0);
        assert!(sink.bytes().is_empty());

        crate::when!(n => 2 > 1, Level::Info, "{}", expensive());
        assert_eq!(evaluated.get(), 1);
        assert_eq!(strip_ansi(&sink.contents()), "[✔] value\n");
    }
}
