//! Minimal streaming HTML tag tokenizer.
//!
//! The wiki scan only needs start/end tags and a handful of attributes, so a
//! full DOM parser would be dead weight. This tokenizer walks the markup
//! once, yielding tags and skipping text, comments and declarations. It is
//! deliberately tolerant: malformed fragments are skipped, never an error.

/// A single tag event from the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// An opening (or self-closing) tag with its attributes
    Start(StartTag<'a>),
    /// A closing tag
    End(&'a str),
}

/// An opening tag and its attributes, borrowed from the source markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag<'a> {
    /// Tag name as written in the source
    pub name: &'a str,
    /// Attribute name/value pairs in source order; valueless attributes
    /// carry an empty value
    pub attrs: Vec<(&'a str, &'a str)>,
}

impl<'a> StartTag<'a> {
    /// Returns the value of the named attribute (ASCII case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }

    /// Returns true if the tag name matches (ASCII case-insensitive)
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Iterator over the tags of an HTML document
pub struct Tokenizer<'a> {
    input: &'a [u8],
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given markup
    pub fn new(src: &'a str) -> Self {
        Self {
            input: src.as_bytes(),
            src,
            pos: 0,
        }
    }

    fn skip_until(&mut self, needle: &str) {
        match self.src[self.pos..].find(needle) {
            Some(offset) => self.pos += offset + needle.len(),
            None => self.pos = self.input.len(),
        }
    }

    fn read_name(&mut self) -> &'a str {
        let start = self.pos;
        while self.pos < self.input.len() {
            let b = self.input[self.pos];
            if b.is_ascii_alphanumeric() || b == b'-' || b == b':' {
                self.pos += 1;
            } else {
                break;
            }
        }
        &self.src[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Reads attributes up to (and past) the closing `>`
    fn read_attrs(&mut self) -> Vec<(&'a str, &'a str)> {
        let mut attrs = Vec::new();
        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                break;
            }
            match self.input[self.pos] {
                b'>' => {
                    self.pos += 1;
                    break;
                }
                b'/' => {
                    self.pos += 1;
                }
                _ => {
                    let name_start = self.pos;
                    while self.pos < self.input.len()
                        && !matches!(self.input[self.pos], b'=' | b'>' | b'/')
                        && !self.input[self.pos].is_ascii_whitespace()
                    {
                        self.pos += 1;
                    }
                    let name = &self.src[name_start..self.pos];
                    self.skip_whitespace();

                    let mut value = "";
                    if self.pos < self.input.len() && self.input[self.pos] == b'=' {
                        self.pos += 1;
                        self.skip_whitespace();
                        value = self.read_attr_value();
                    }
                    if !name.is_empty() {
                        attrs.push((name, value));
                    }
                }
            }
        }
        attrs
    }

    fn read_attr_value(&mut self) -> &'a str {
        if self.pos >= self.input.len() {
            return "";
        }
        match self.input[self.pos] {
            quote @ (b'"' | b'\'') => {
                self.pos += 1;
                let start = self.pos;
                while self.pos < self.input.len() && self.input[self.pos] != quote {
                    self.pos += 1;
                }
                let value = &self.src[start..self.pos];
                if self.pos < self.input.len() {
                    self.pos += 1; // consume closing quote
                }
                value
            }
            _ => {
                let start = self.pos;
                while self.pos < self.input.len()
                    && !matches!(self.input[self.pos], b'>' | b'/')
                    && !self.input[self.pos].is_ascii_whitespace()
                {
                    self.pos += 1;
                }
                &self.src[start..self.pos]
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Advance to the next tag opener, skipping text content.
            match self.src[self.pos..].find('<') {
                Some(offset) => self.pos += offset + 1,
                None => return None,
            }
            if self.pos >= self.input.len() {
                return None;
            }

            match self.input[self.pos] {
                b'!' | b'?' => {
                    // Comment, doctype or processing instruction.
                    if self.src[self.pos..].starts_with("!--") {
                        self.skip_until("-->");
                    } else {
                        self.skip_until(">");
                    }
                }
                b'/' => {
                    self.pos += 1;
                    let name = self.read_name();
                    self.skip_until(">");
                    if !name.is_empty() {
                        return Some(Token::End(name));
                    }
                }
                b if b.is_ascii_alphabetic() => {
                    let name = self.read_name();
                    let attrs = self.read_attrs();
                    return Some(Token::Start(StartTag { name, attrs }));
                }
                _ => {
                    // Stray '<' in text; keep scanning.
                }
            }
        }
    }
}
