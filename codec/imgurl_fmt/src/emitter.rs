//! Output Emitter
//!
//! Abstraction for output production during serialization.

/// Trait for emitting URL text.
///
/// The serializer writes to an emitter section by section. Implementations
/// may build a string, append to an existing buffer, or count bytes.
pub trait Emitter {
    /// Emit a text fragment verbatim.
    fn emit(&mut self, text: &str);

    /// Emit the path segment separator `/`.
    fn emit_slash(&mut self) {
        self.emit("/");
    }

    /// Emit the parameter list separator `,`.
    fn emit_comma(&mut self) {
        self.emit(",");
    }

    /// Emit the code/value separator `_`.
    fn emit_underscore(&mut self) {
        self.emit("_");
    }
}

/// String-based emitter for in-memory serialization.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the serialized output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_slash(&mut self) {
        self.buffer.push('/');
    }

    fn emit_comma(&mut self) {
        self.buffer.push(',');
    }

    fn emit_underscore(&mut self) {
        self.buffer.push('_');
    }
}

/// Emitter that only measures the output length.
///
/// Used to size a [`StringEmitter`] before the real pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct LengthEmitter {
    len: usize,
}

impl LengthEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Emitter for LengthEmitter {
    fn emit(&mut self, text: &str) {
        self.len += text.len();
    }
}
