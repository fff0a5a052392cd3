//! 终端输出
//!
//! [`Logger`] 是显式构造的输出对象：决定是否着色、写到哪里。
//! negotiator 和 postinstall hook 通过它输出，测试可以捕获或丢弃输出。

use colored::Colorize;
use std::env;
use std::io::{self, IsTerminal, Write};

/// 一行输出的样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Bold,
    Dim,
    Info,
    Success,
    Warn,
    Error,
}

/// 带样式的行输出
pub struct Logger {
    out: Box<dyn Write>,
    color: bool,
}

impl Logger {
    pub fn new(out: Box<dyn Write>, color: bool) -> Self {
        Self { out, color }
    }

    /// 标准输出；只有终端且未设置 `NO_COLOR` 时着色
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none();
        Self::new(Box::new(io::stdout()), color)
    }

    /// 丢弃所有输出
    pub fn silent() -> Self {
        Self::new(Box::new(io::sink()), false)
    }

    pub fn line(&mut self, tone: Tone, message: impl AsRef<str>) {
        let message = message.as_ref();
        let rendered = if self.color {
            let styled = match tone {
                Tone::Plain => message.normal(),
                Tone::Bold => message.bold(),
                Tone::Dim => message.dimmed(),
                Tone::Info => message.blue(),
                Tone::Success => message.green(),
                Tone::Warn => message.yellow(),
                Tone::Error => message.red(),
            };
            styled.to_string()
        } else {
            message.to_string()
        };

        // 输出失败（例如管道已关闭）不影响流程
        let _ = writeln!(self.out, "{}", rendered);
        let _ = self.out.flush();
    }

    pub fn plain(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Plain, message);
    }

    pub fn heading(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Bold, message);
    }

    pub fn dim(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Dim, message);
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Info, message);
    }

    pub fn success(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Success, message);
    }

    pub fn warn(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Warn, message);
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        self.line(Tone::Error, message);
    }

    /// `=====` 分隔线
    pub fn rule(&mut self, width: usize) {
        self.info("=".repeat(width));
    }
}

#[cfg(test)]
pub(crate) mod capture {
    use super::Logger;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    /// 可在测试中读回内容的共享缓冲区
    #[derive(Clone, Default)]
    pub struct Captured(Rc<RefCell<Vec<u8>>>);

    impl Captured {
        pub fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn logger() -> (Logger, Captured) {
        let captured = Captured::default();
        (Logger::new(Box::new(captured.clone()), false), captured)
    }
}
