use std::fmt::{self, Display, Formatter, Write};

use crate::providers::SortedProviders;

/// Writes `s` as a quoted string literal. Single quotes are preferred; double
/// quotes are used when that avoids escaping.
pub fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c if !is_printable(c) => match c as u32 {
                n @ 0..=0xff => write!(out, "\\x{n:02x}")?,
                n @ 0x100..=0xffff => write!(out, "\\u{n:04x}")?,
                n => write!(out, "\\U{n:08x}")?,
            },
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}

/// Control, format, private-use and separator characters other than the plain
/// space are escaped. Unassigned code points are written as-is.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        c as u32,
        // Cc
        0x00..=0x1f
        | 0x7f..=0x9f
        // Zs, Zl, Zp
        | 0xa0
        | 0x1680
        | 0x2000..=0x200a
        | 0x2028
        | 0x2029
        | 0x202f
        | 0x205f
        | 0x3000
        // Cf
        | 0xad
        | 0x600..=0x605
        | 0x61c
        | 0x6dd
        | 0x70f
        | 0x890..=0x891
        | 0x8e2
        | 0x180e
        | 0x200b..=0x200f
        | 0x202a..=0x202e
        | 0x2060..=0x2064
        | 0x2066..=0x206f
        | 0xfeff
        | 0xfff9..=0xfffb
        | 0x110bd
        | 0x110cd
        | 0x13430..=0x1343f
        | 0x1bca0..=0x1bca3
        | 0x1d173..=0x1d17a
        | 0xe0001
        | 0xe0020..=0xe007f
        // Co
        | 0xe000..=0xf8ff
        | 0xf0000..=0xffffd
        | 0x100000..=0x10fffd
    )
}

/// `{'provider': ['host:port', ...], ...}`
impl Display for SortedProviders {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (provider, servers)) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_quoted(f, provider)?;
            f.write_str(": [")?;
            for (j, server) in servers.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write_quoted(f, server)?;
            }
            f.write_char(']')?;
        }
        f.write_char('}')
    }
}
