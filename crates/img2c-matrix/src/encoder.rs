/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Indentation used for elements of the array
const INDENT: &str = "    ";

/// Renders bytes as a brace delimited C initializer
///
/// Bytes are written as lowercase hex literals without zero padding
/// (`0x0`, `0x1f`), every element is followed by `", "` and a line break
/// is inserted after every `wrap` elements.
///
/// ```
/// use img2c_matrix::CArrayFormatter;
///
/// let text = CArrayFormatter::new(2).format(&[0, 255, 16]);
/// assert_eq!(text, "{\n    0x0, 0xff, \n    0x10, \n};");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct CArrayFormatter {
    wrap: usize
}

impl CArrayFormatter {
    /// Create a formatter breaking lines after `wrap` elements
    ///
    /// A wrap of zero keeps all elements on one line
    pub const fn new(wrap: usize) -> CArrayFormatter {
        CArrayFormatter { wrap }
    }

    pub const fn wrap(&self) -> usize {
        self.wrap
    }

    /// Render `bytes` as a C initializer
    pub fn format(&self, bytes: &[u8]) -> String {
        // "0xff, " is the longest element
        let mut out = String::with_capacity(bytes.len() * 6 + 16);

        out.push_str("{\n");
        out.push_str(INDENT);

        for (i, byte) in bytes.iter().enumerate() {
            out.push_str(&format!("{byte:#x}, "));

            if self.wrap != 0 && i % self.wrap == self.wrap - 1 {
                out.push('\n');
                out.push_str(INDENT);
            }
        }
        out.push_str("\n};");
        out
    }
}

impl Default for CArrayFormatter {
    fn default() -> Self {
        CArrayFormatter::new(6)
    }
}
