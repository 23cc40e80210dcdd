//! Text accumulator for generated CMake.
//!
//! Every instruction is written as `name(arg1 arg2 ... argN)` on its own
//! line. Arguments are written verbatim; string values are wrapped with
//! [`quote`] by the caller.

/// Wrap a value in double quotes. Embedded quotes are not escaped.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", s)
}

/// An ordered region of generated script text.
#[derive(Debug, Default, Clone)]
pub struct ScriptWriter {
    buf: String,
}

impl ScriptWriter {
    pub fn new() -> Self {
        ScriptWriter::default()
    }

    /// Emit a command invocation.
    pub fn call<I, S>(&mut self, name: &str, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.buf.push_str(name);
        self.buf.push('(');

        for (i, arg) in args.into_iter().enumerate() {
            if i > 0 {
                self.buf.push(' ');
            }
            self.buf.push_str(arg.as_ref());
        }

        self.buf.push_str(")\n");
    }

    /// Open a conditional block. The condition is written as given.
    pub fn if_block(&mut self, condition: &str) {
        self.call("if", [condition]);
    }

    pub fn else_block(&mut self) {
        self.call("else", [""; 0]);
    }

    pub fn end_if(&mut self) {
        self.call("endif", [""; 0]);
    }

    /// Copy raw script lines, each followed by a newline.
    pub fn lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        for line in lines {
            self.buf.push_str(line.as_ref());
            self.buf.push('\n');
        }
    }

    /// Write a comment line followed by a blank line.
    pub fn comment(&mut self, text: &str) {
        self.buf.push_str("# ");
        self.buf.push_str(text);
        self.buf.push_str("\n\n");
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
