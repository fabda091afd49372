// ============================================================================
// Aurora - 结构化数据编码
// ============================================================================
//
// 文件: src/core/structured.rs
// 职责: 任意可序列化值编码为带颜色的缩进 JSON
// 边界:
//   - ✅ 缩进模式定义
//   - ✅ Encode 编码接口
//   - ✅ JSON 着色格式器
//   - ❌ 不应包含输出目标写入
//   - ❌ 不应包含加锁逻辑
//
// ============================================================================

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::{AuroraError, Result};
use crate::utils::colors::{self, ansi};

/// JSON 缩进模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    /// 紧凑输出，无换行
    #[default]
    None,
    /// 一个空格
    Space,
    /// 两个空格
    Space2,
    /// 四个空格
    Space4,
    /// 制表符
    Tab,
    /// 调试用的醒目缩进（"• "）
    Debug,
}

impl Indent {
    /// 每层缩进使用的字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Indent::None => "",
            Indent::Space => " ",
            Indent::Space2 => "  ",
            Indent::Space4 => "    ",
            Indent::Tab => "\t",
            Indent::Debug => "• ",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Indent::None => "none",
            Indent::Space => "space",
            Indent::Space2 => "space2",
            Indent::Space4 => "space4",
            Indent::Tab => "tab",
            Indent::Debug => "debug",
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Indent {
    type Err = AuroraError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Indent::None),
            "space" | "1" => Ok(Indent::Space),
            "space2" | "2" => Ok(Indent::Space2),
            "space4" | "4" => Ok(Indent::Space4),
            "tab" => Ok(Indent::Tab),
            "debug" => Ok(Indent::Debug),
            _ => Err(AuroraError::UnknownIndent(s.to_string())),
        }
    }
}

/// 结构化编码接口
///
/// 所有实现 `Serialize` 的类型自动实现，因此可以把不同类型的值
/// 放进同一个 `&[&dyn Encode]` 里交给 [`Notifier::json`](crate::Notifier::json)。
pub trait Encode {
    /// 按给定缩进编码；缩进为空时输出紧凑格式
    fn encode(&self, indent: &str) -> Result<Vec<u8>>;
}

impl<T: Serialize + ?Sized> Encode for T {
    fn encode(&self, indent: &str) -> Result<Vec<u8>> {
        to_colored_json(self, indent)
    }
}

/// 编码为 JSON 字节；颜色开关打开时附带 ANSI 着色
///
/// 键与值之间的冒号后不加空格。
pub fn to_colored_json<T: Serialize + ?Sized>(value: &T, indent: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    let formatter = ColorFormatter::new(indent.as_bytes(), colors::enabled());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

struct ColorFormatter<'a> {
    indent: &'a [u8],
    depth: usize,
    has_value: bool,
    colored: bool,
    in_key: bool,
}

impl<'a> ColorFormatter<'a> {
    fn new(indent: &'a [u8], colored: bool) -> Self {
        Self {
            indent,
            depth: 0,
            has_value: false,
            colored,
            in_key: false,
        }
    }

    fn open<W: ?Sized + Write>(&self, writer: &mut W, code: &str) -> io::Result<()> {
        if self.colored {
            writer.write_all(code.as_bytes())?;
        }
        Ok(())
    }

    fn close<W: ?Sized + Write>(&self, writer: &mut W) -> io::Result<()> {
        if self.colored {
            writer.write_all(ansi::RESET.as_bytes())?;
        }
        Ok(())
    }

    // 键内部的数字（整数键）沿用键的颜色
    fn token<W, F>(&self, writer: &mut W, code: &str, write: F) -> io::Result<()>
    where
        W: ?Sized + Write,
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        if self.in_key || !self.colored {
            return write(writer);
        }
        self.open(writer, code)?;
        write(writer)?;
        self.close(writer)
    }

    fn newline<W: ?Sized + Write>(&self, writer: &mut W) -> io::Result<()> {
        if self.indent.is_empty() {
            return Ok(());
        }
        writer.write_all(b"\n")?;
        for _ in 0..self.depth {
            writer.write_all(self.indent)?;
        }
        Ok(())
    }

    fn begin_value<W: ?Sized + Write>(&self, writer: &mut W, first: bool) -> io::Result<()> {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }

    fn begin_container<W: ?Sized + Write>(&mut self, writer: &mut W, open: &[u8]) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(open)
    }

    fn end_container<W: ?Sized + Write>(&mut self, writer: &mut W, close: &[u8]) -> io::Result<()> {
        self.depth -= 1;
        if self.has_value {
            self.newline(writer)?;
        }
        writer.write_all(close)
    }
}

macro_rules! colored_numbers {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method<W>(&mut self, writer: &mut W, value: $ty) -> io::Result<()>
            where
                W: ?Sized + Write,
            {
                self.token(writer, ansi::CYAN, |w| CompactFormatter.$method(w, value))
            }
        )*
    };
}

impl Formatter for ColorFormatter<'_> {
    fn write_null<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.token(writer, ansi::BRIGHT_BLACK, |w| w.write_all(b"null"))
    }

    fn write_bool<W>(&mut self, writer: &mut W, value: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let text: &[u8] = if value { b"true" } else { b"false" };
        self.token(writer, ansi::YELLOW, |w| w.write_all(text))
    }

    colored_numbers! {
        write_i8: i8,
        write_i16: i16,
        write_i32: i32,
        write_i64: i64,
        write_i128: i128,
        write_u8: u8,
        write_u16: u16,
        write_u32: u32,
        write_u64: u64,
        write_u128: u128,
        write_f32: f32,
        write_f64: f64,
    }

    fn write_number_str<W>(&mut self, writer: &mut W, value: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.token(writer, ansi::CYAN, |w| w.write_all(value.as_bytes()))
    }

    fn begin_string<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let code = if self.in_key {
            ansi::BOLD_BRIGHT_BLUE
        } else {
            ansi::GREEN
        };
        self.open(writer, code)?;
        writer.write_all(b"\"")
    }

    fn end_string<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b"\"")?;
        self.close(writer)
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.begin_container(writer, b"[")
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.end_container(writer, b"]")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.begin_value(writer, first)
    }

    fn end_array_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.begin_container(writer, b"{")
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.end_container(writer, b"}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.begin_value(writer, first)?;
        self.in_key = true;
        Ok(())
    }

    fn end_object_key<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.in_key = false;
        Ok(())
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b":")
    }

    fn end_object_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.has_value = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::colors::strip_ansi;
    use serde::ser::{Error as _, Serializer};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn render(value: &dyn Encode, indent: Indent) -> String {
        let bytes = value.encode(indent.as_str()).unwrap();
        strip_ansi(&String::from_utf8(bytes).unwrap())
    }

    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("value refuses to serialize"))
        }
    }

    #[test]
    fn compact_output_has_no_whitespace() {
        let value = json!({"key": "value", "n": 1});
        assert_eq!(render(&value, Indent::None), r#"{"key":"value","n":1}"#);
    }

    #[test]
    fn two_space_indent_nests_members() {
        let value = json!({"a": [1, 2], "b": {}, "c": null});
        let expected = "{\n  \"a\":[\n    1,\n    2\n  ],\n  \"b\":{},\n  \"c\":null\n}";
        assert_eq!(render(&value, Indent::Space2), expected);
    }

    #[test]
    fn tab_and_debug_indents_repeat_per_depth() {
        let value = json!({"outer": {"inner": true}});
        assert_eq!(
            render(&value, Indent::Tab),
            "{\n\t\"outer\":{\n\t\t\"inner\":true\n\t}\n}"
        );
        assert_eq!(
            render(&value, Indent::Debug),
            "{\n• \"outer\":{\n• • \"inner\":true\n• }\n}"
        );
    }

    #[test]
    fn empty_containers_stay_on_one_line() {
        assert_eq!(render(&json!([]), Indent::Space4), "[]");
        assert_eq!(render(&json!({}), Indent::Space4), "{}");
    }

    #[test]
    fn integer_keys_are_quoted() {
        let mut map = BTreeMap::new();
        map.insert(7, "seven");
        assert_eq!(render(&map, Indent::None), r#"{"7":"seven"}"#);
    }

    #[test]
    fn serializer_errors_surface_as_encode_errors() {
        let err = Broken.encode("  ").unwrap_err();
        assert!(matches!(err, AuroraError::Encode(_)));
        assert!(err.to_string().starts_with("failed to marshal JSON:"));
    }

    #[test]
    fn indent_names_parse() {
        assert_eq!("space2".parse::<Indent>().unwrap(), Indent::Space2);
        assert_eq!("4".parse::<Indent>().unwrap(), Indent::Space4);
        assert!("wide".parse::<Indent>().is_err());
    }
}
