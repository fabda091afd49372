// ============================================================================
// Aurora - Notifier 输出器
// ============================================================================
//
// 文件: src/core/notifier.rs
// 职责: 分级、带前缀、线程安全的终端输出
// 边界:
//   - ✅ 输出目标绑定与共享
//   - ✅ 前缀派生
//   - ✅ 行组装（符号、时间戳、前缀、消息）
//   - ✅ 结构化数据输出
//   - ✅ 同一派生族内的写入互斥
//   - ❌ 不应包含级别映射存储（由注册表负责）
//   - ❌ 不应包含 JSON 编码细节（由 structured 负责）
//   - ❌ 不应包含级别过滤
//
// ============================================================================

use chrono::Local;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::registry;
use super::structured::{Encode, Indent};
use crate::models::level::Level;
use crate::ui::robot;
use crate::utils::colors::{Color, Style};
use crate::utils::constants::{icons, JSON_TITLE_SUFFIX, TIMESTAMP_FORMAT};
use crate::utils::sink::Sink;

/// 分级终端输出器
///
/// 由 [`Notifier::with`] 派生出的实例与父实例共享同一个输出目标和同一把锁，
/// 因此整个派生族的输出按行互不穿插。分别通过 [`Notifier::new`] 创建的实例
/// 之间没有同步，即使它们包装的是同一个底层流。
///
/// ```
/// use aurora::{MemorySink, Notifier};
///
/// let sink = MemorySink::new();
/// let db = Notifier::from_writer(sink.clone()).with("db");
/// db.with("pool").info(format_args!("{} connections", 4));
///
/// assert!(aurora::strip_ansi(&sink.contents()).ends_with("[db pool] 4 connections\n"));
/// ```
#[derive(Clone)]
pub struct Notifier {
    output: Arc<Mutex<Sink>>,
    prefix: String,
}

impl Notifier {
    /// 绑定输出目标；为 `None` 时使用标准输出
    pub fn new(sink: Option<Sink>) -> Self {
        let sink = sink.unwrap_or_else(|| Box::new(io::stdout()));
        Self {
            output: Arc::new(Mutex::new(sink)),
            prefix: String::new(),
        }
    }

    /// 绑定标准输出
    pub fn stdout() -> Self {
        Self::new(None)
    }

    /// 绑定任意写入目标
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::new(Some(Box::new(writer)))
    }

    /// 当前前缀
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 派生带附加前缀的子实例
    ///
    /// 子实例共享输出目标和锁；前缀以空格连接父前缀，例如
    /// `with("db").with("pool")` 得到 `"db pool"`。
    pub fn with(&self, prefix: &str) -> Notifier {
        let prefix = if self.prefix.is_empty() {
            prefix.to_string()
        } else {
            format!("{} {}", self.prefix, prefix)
        };
        Notifier {
            output: Arc::clone(&self.output),
            prefix,
        }
    }

    /// 两个实例是否属于同一派生族
    pub fn shares_output_with(&self, other: &Notifier) -> bool {
        Arc::ptr_eq(&self.output, &other.output)
    }

    // ------------------------------------------------------------------
    // 基础输出形态
    // ------------------------------------------------------------------

    /// 带符号和时间戳的一行
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        let mut out = self.lock();
        self.write_timestamped(&mut out, level, args);
    }

    /// 带符号、不带时间戳的一行
    pub fn inlinef(&self, level: Level, args: fmt::Arguments<'_>) {
        let mut out = self.lock();
        let (symbol, style) = registry::decoration(level);
        let line = format!("{} {}\n", symbol, self.with_prefix(&fmt::format(args)));
        write_styled(&mut out, &style, &line);
    }

    /// 只带前缀的一行，仍按级别着色
    pub fn printf(&self, level: Level, args: fmt::Arguments<'_>) {
        let mut out = self.lock();
        let style = registry::style(level);
        let line = format!("{}\n", self.with_prefix(&fmt::format(args)));
        write_styled(&mut out, &style, &line);
    }

    /// 输出 `count` 个空行，不带前缀
    pub fn line(&self, count: usize) {
        let mut out = self.lock();
        let style = registry::style(Level::NoLevel);
        write_styled(&mut out, &style, &"\n".repeat(count));
    }

    /// 输出一个空行
    pub fn br(&self) {
        self.line(1);
    }

    // ------------------------------------------------------------------
    // 级别快捷方式
    // ------------------------------------------------------------------

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.inlinef(Level::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.inlinef(Level::Info, args);
    }

    pub fn notice(&self, args: fmt::Arguments<'_>) {
        self.inlinef(Level::Notice, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.inlinef(Level::Warn, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.inlinef(Level::Error, args);
    }

    pub fn alert(&self, args: fmt::Arguments<'_>) {
        self.inlinef(Level::Alert, args);
    }

    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.inlinef(Level::Critical, args);
    }

    /// Info 级别，消息前加 `✓`
    pub fn success(&self, args: fmt::Arguments<'_>) {
        self.inlinef(Level::Info, format_args!("{} {}", icons::SUCCESS, args));
    }

    /// Error 级别，消息前加 `✗`
    pub fn failure(&self, args: fmt::Arguments<'_>) {
        self.inlinef(Level::Error, format_args!("{} {}", icons::ERROR, args));
    }

    // ------------------------------------------------------------------
    // 条件与延迟输出
    // ------------------------------------------------------------------

    /// 条件为真时按 [`Notifier::inlinef`] 输出
    ///
    /// 条件为假时不加锁，也不会格式化任何参数。需要连参数求值
    /// 一并跳过时使用 [`when!`](crate::when) 宏。
    pub fn when(&self, condition: bool, level: Level, args: fmt::Arguments<'_>) {
        if condition {
            self.inlinef(level, args);
        }
    }

    /// 加锁后才调用 `produce`，并按级别样式原样写出其结果
    ///
    /// `produce` 运行时锁已被持有，不能再通过同一派生族输出，否则会死锁。
    pub fn lazy<F>(&self, level: Level, produce: F)
    where
        F: FnOnce() -> String,
    {
        let mut out = self.lock();
        let style = registry::style(level);
        write_styled(&mut out, &style, &produce());
    }

    // ------------------------------------------------------------------
    // 自定义样式
    // ------------------------------------------------------------------

    /// 使用指定样式输出，忽略级别样式；不追加换行
    pub fn color(&self, style: &Style, args: fmt::Arguments<'_>) {
        let mut out = self.lock();
        write_styled(&mut out, style, &fmt::format(args));
    }

    /// 黄底黑字高亮输出
    pub fn highlight(&self, args: fmt::Arguments<'_>) {
        let style = Style::fg(Color::Black).with_bg(Color::Yellow);
        self.color(&style, args);
    }

    /// 使用自定义格式化函数生成文本，按无级别样式输出
    pub fn format<F>(&self, formatter: F, args: fmt::Arguments<'_>)
    where
        F: FnOnce(fmt::Arguments<'_>) -> String,
    {
        let mut out = self.lock();
        let style = registry::style(Level::NoLevel);
        write_styled(&mut out, &style, &formatter(args));
    }

    // ------------------------------------------------------------------
    // 结构化输出
    // ------------------------------------------------------------------

    /// 紧凑格式输出，无标题
    pub fn json(&self, values: &[&dyn Encode]) {
        self.json_indent(None, Indent::None, values);
    }

    /// 两空格缩进输出，带标题
    pub fn json_title(&self, title: &str, values: &[&dyn Encode]) {
        self.json_indent(Some(title), Indent::Space2, values);
    }

    /// 按指定缩进输出若干值
    ///
    /// 标题行和数据体分两次加锁写出：并发时其他线程的输出可能落在两者之间。
    /// 某个值编码失败时写一条 Error 级别的时间戳行并继续处理后续值。
    pub fn json_indent(&self, title: Option<&str>, indent: Indent, values: &[&dyn Encode]) {
        if let Some(title) = title {
            self.inlinef(Level::Debug, format_args!("{}: {}", title, JSON_TITLE_SUFFIX));
        }

        let mut out = self.lock();
        for value in values {
            match value.encode(indent.as_str()) {
                Ok(mut data) => {
                    data.push(b'\n');
                    write_raw(&mut out, &data);
                }
                Err(err) => {
                    tracing::debug!(error = %err, "skipping value that failed to encode");
                    self.write_timestamped(&mut out, Level::Error, format_args!("{}", err));
                }
            }
        }
        write_raw(&mut out, b"\n");
    }

    // ------------------------------------------------------------------
    // 装饰与终止
    // ------------------------------------------------------------------

    /// 按级别样式输出一个随机 ASCII 机器人
    pub fn robot(&self, level: Level) {
        let mut out = self.lock();
        let style = registry::style(level);
        write_styled(&mut out, &style, &format!("{}\n", robot::random()));
    }

    /// 以 Critical 级别输出后携带相同消息 panic
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let message = fmt::format(args);
        self.inlinef(Level::Critical, format_args!("{}", message));
        panic!("{}", message);
    }

    // ------------------------------------------------------------------
    // 内部工具
    // ------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, Sink> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_prefix(&self, message: &str) -> String {
        if self.prefix.is_empty() {
            message.to_string()
        } else {
            format!("[{}] {}", self.prefix, message)
        }
    }

    // 调用方必须已持有锁
    fn write_timestamped(&self, out: &mut Sink, level: Level, args: fmt::Arguments<'_>) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let (symbol, style) = registry::decoration(level);
        let line = format!(
            "{} {} {}\n",
            symbol,
            timestamp,
            self.with_prefix(&fmt::format(args))
        );
        write_styled(out, &style, &line);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

fn write_styled(out: &mut Sink, style: &Style, text: &str) {
    write_raw(out, style.paint(text).as_bytes());
}

// 写入失败不向调用方传播，只记录诊断日志
fn write_raw(out: &mut Sink, bytes: &[u8]) {
    if let Err(err) = out.write_all(bytes).and_then(|_| out.flush()) {
        tracing::warn!(error = %err, "failed to write to output sink");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::colors::strip_ansi;
    use crate::utils::sink::MemorySink;
    use serde::ser::{Error as _, Serializer};
    use serde::Serialize;
    use serde_json::json;
    use std::collections::HashMap;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn capture() -> (Notifier, MemorySink) {
        let sink = MemorySink::new();
        (Notifier::from_writer(sink.clone()), sink)
    }

    fn text(sink: &MemorySink) -> String {
        strip_ansi(&sink.contents())
    }

    struct Failing;

    impl Serialize for Failing {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot encode this"))
        }
    }

    struct CountingDisplay<'a>(&'a AtomicUsize);

    impl fmt::Display for CountingDisplay<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            f.write_str("counted")
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn inline_lines_carry_level_symbols() {
        let cases = [
            (Level::Info, "Info", "[✔] Info test\n"),
            (Level::Error, "Error", "[✘] Error test\n"),
            (Level::Debug, "Debug", "[⧳] Debug test\n"),
            (Level::Warn, "Warn", "[⚠] Warn test\n"),
        ];
        for (level, name, expected) in cases {
            let (n, sink) = capture();
            n.inlinef(level, format_args!("{} test", name));
            assert_eq!(text(&sink), expected);
        }
    }

    #[test]
    fn level_shortcuts_use_their_level() {
        let (n, sink) = capture();
        n.debug(format_args!("a"));
        n.info(format_args!("b"));
        n.notice(format_args!("c"));
        n.warn(format_args!("d"));
        n.error(format_args!("e"));
        n.alert(format_args!("f"));
        n.critical(format_args!("g"));
        assert_eq!(
            text(&sink),
            "[⧳] a\n[✔] b\n[⚑] c\n[⚠] d\n[✘] e\n[✭] f\n[‼] g\n"
        );
    }

    #[test]
    fn prefix_wraps_message_in_brackets() {
        let (n, sink) = capture();
        n.with("TEST").inlinef(Level::Info, format_args!("Prefixed message"));
        assert_eq!(text(&sink), "[✔] [TEST] Prefixed message\n");
    }

    #[test]
    fn chained_prefixes_join_with_spaces() {
        let (n, sink) = capture();
        let child = n.with("a").with("b");
        assert_eq!(child.prefix(), "a b");
        child.info(format_args!("msg"));
        assert_eq!(text(&sink), "[✔] [a b] msg\n");
        assert!(n.prefix().is_empty());
    }

    #[test]
    fn derived_notifiers_share_the_family_lock() {
        let (n, _sink) = capture();
        let child = n.with("child");
        let (other, _) = capture();
        assert!(child.shares_output_with(&n));
        assert!(child.with("grandchild").shares_output_with(&n));
        assert!(!other.shares_output_with(&n));
    }

    #[test]
    fn timestamped_line_contains_todays_date() {
        let (n, sink) = capture();
        n.logf(Level::Info, format_args!("test log {}", 123));
        let output = text(&sink);
        assert!(output.starts_with("[✔] "));
        assert!(output.contains(&Local::now().format("%Y-%m-%d").to_string()));
        assert!(output.contains("M test log 123\n"), "got {output:?}");
    }

    #[test]
    fn timestamped_line_places_prefix_after_timestamp() {
        let (n, sink) = capture();
        n.with("db").logf(Level::Warn, format_args!("slow"));
        let output = text(&sink);
        assert!(output.starts_with("[⚠] "));
        assert!(output.ends_with("[db] slow\n"));
    }

    #[test]
    fn printf_has_no_symbol() {
        let (n, sink) = capture();
        n.printf(Level::Info, format_args!("plain message {}", "test"));
        n.with("ctx").printf(Level::Error, format_args!("x"));
        assert_eq!(text(&sink), "plain message test\n[ctx] x\n");
    }

    #[test]
    fn blank_lines_ignore_prefix() {
        let (n, sink) = capture();
        n.with("ignored").line(3);
        n.br();
        assert_eq!(text(&sink), "\n\n\n\n");
    }

    #[test]
    fn success_and_failure_prefix_glyphs() {
        let (n, sink) = capture();
        n.success(format_args!("Operation {}", "completed"));
        n.failure(format_args!("Operation failed"));
        assert_eq!(
            text(&sink),
            "[✔] ✓ Operation completed\n[✘] ✗ Operation failed\n"
        );
    }

    #[test]
    fn false_guard_writes_nothing_and_formats_nothing() {
        let (n, sink) = capture();
        let calls = AtomicUsize::new(0);
        n.when(false, Level::Info, format_args!("{}", CountingDisplay(&calls)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(sink.bytes().is_empty());

        n.when(true, Level::Info, format_args!("{}", CountingDisplay(&calls)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(text(&sink), "[✔] counted\n");
    }

    #[test]
    fn lazy_runs_producer_once_and_writes_result_verbatim() {
        let (n, sink) = capture();
        let calls = AtomicUsize::new(0);
        n.with("p").lazy(Level::Notice, || {
            calls.fetch_add(1, Ordering::SeqCst);
            "expensive".to_string()
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(text(&sink), "expensive");
    }

    #[test]
    fn custom_style_bypasses_symbol_and_newline() {
        let (n, sink) = capture();
        n.color(&Style::fg(Color::Red), format_args!("one-{}", 1));
        n.highlight(format_args!("two"));
        assert_eq!(text(&sink), "one-1two");
    }

    #[test]
    fn format_uses_caller_formatter() {
        let (n, sink) = capture();
        n.format(|args| format!("<<{}>>", args).to_uppercase(), format_args!("hi {}", 5));
        assert_eq!(text(&sink), "<<HI 5>>");
    }

    #[test]
    fn unregistered_level_renders_empty_symbol() {
        let (n, sink) = capture();
        n.inlinef(Level::Custom(4_321), format_args!("bare"));
        assert_eq!(text(&sink), " bare\n");
    }

    #[test]
    fn json_without_title_is_compact() {
        let (n, sink) = capture();
        let mut data = HashMap::new();
        data.insert("key", "value");
        n.json(&[&data]);
        assert_eq!(text(&sink), "{\"key\":\"value\"}\n\n");
    }

    #[test]
    fn json_title_writes_heading_then_indented_body() {
        let (n, sink) = capture();
        let mut data = HashMap::new();
        data.insert("key", "value");
        n.json_title("Test Data", &[&data]);
        let output = text(&sink);
        assert!(output.starts_with("[⧳] Test Data: JSON ↴↴\n"), "got {output:?}");
        assert!(output.contains("{\n  \"key\":\"value\"\n}\n\n"), "got {output:?}");
    }

    #[test]
    fn json_title_respects_prefix_only_on_heading() {
        let (n, sink) = capture();
        n.with("api").json_indent(Some("body"), Indent::None, &[&json!([1, 2])]);
        assert_eq!(text(&sink), "[⧳] [api] body: JSON ↴↴\n[1,2]\n\n");
    }

    #[test]
    fn json_failure_does_not_abort_the_batch() {
        let (n, sink) = capture();
        let ok = json!({"ok": true});
        n.json_indent(None, Indent::None, &[&Failing, &ok, &"tail"]);
        let output = text(&sink);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4, "got {output:?}");
        assert!(lines[0].starts_with("[✘] "));
        assert!(lines[0].contains("failed to marshal JSON: cannot encode this"));
        assert_eq!(lines[1], "{\"ok\":true}");
        assert_eq!(lines[2], "\"tail\"");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn empty_json_batch_writes_only_the_trailing_line() {
        let (n, sink) = capture();
        n.json(&[]);
        assert_eq!(text(&sink), "\n");
    }

    #[test]
    fn robot_is_multiline() {
        let (n, sink) = capture();
        n.robot(Level::Info);
        let output = text(&sink);
        assert!(output.ends_with('\n'));
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn fatal_logs_before_panicking() {
        let (n, sink) = capture();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            n.fatal(format_args!("boom {}", 7));
        }));
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("boom 7"));
        assert_eq!(text(&sink), "[‼] boom 7\n");

        // 锁在 panic 前已释放，实例仍可继续使用
        n.info(format_args!("after"));
        assert!(text(&sink).ends_with("[✔] after\n"));
    }

    #[test]
    fn concurrent_lines_never_interleave() {
        let (n, sink) = capture();
        let threads = 32;
        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let n = if i % 2 == 0 { n.clone() } else { n.with("w") };
                thread::spawn(move || {
                    n.inlinef(Level::Debug, format_args!("Message {}", i));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let output = text(&sink);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), threads);
        for line in lines {
            assert!(line.starts_with("[⧳] "), "malformed line {line:?}");
            assert!(
                line.starts_with("[⧳] Message ") || line.starts_with("[⧳] [w] Message "),
                "malformed line {line:?}"
            );
        }
    }

    #[test]
    fn failing_sink_does_not_panic() {
        let n = Notifier::from_writer(BrokenSink);
        n.info(format_args!("dropped"));
        n.json(&[&json!({"a": 1})]);
    }

    #[test]
    fn debug_output_shows_prefix() {
        let (n, _) = capture();
        assert!(format!("{:?}", n.with("x")).contains("\"x\""));
    }
}
