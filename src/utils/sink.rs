// ============================================================================
// Aurora - 输出目标
// ============================================================================
//
// 文件: src/utils/sink.rs
// 职责: 常用输出目标实现
// 边界:
//   - ✅ 内存缓冲输出目标
//   - ✅ 多路分发输出目标
//   - ❌ 不应包含格式化逻辑
//   - ❌ 不应包含加锁策略（由 Notifier 负责）
//
// ============================================================================

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// 输出目标：任意可写入字节的对象
pub type Sink = Box<dyn Write + Send>;

/// 内存缓冲输出目标
///
/// 克隆后共享同一块缓冲区，便于写入方与读取方分离。
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已写入的字节
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 已写入的内容（非 UTF-8 字节按替换字符处理）
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// 清空缓冲区
    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// 多路分发输出目标：每次写入都转发给全部下游
#[derive(Default)]
pub struct FanOut {
    sinks: Vec<Sink>,
}

impl FanOut {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加下游输出目标
    pub fn with(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn push(&mut self, sink: Sink) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Write for FanOut {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for sink in &mut self.sinks {
            sink.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}
