use std::io::{self, Write};

/// Include guard definition in the generated header, terminator included.
pub const MACRO_GUARD_LINE: &[u8] = b"#define _LIBDWARF_H\n";

/// Forward typedef that clashes with the one provided by `libelf.h`.
pub const ELF_TYPEDEF_LINE: &[u8] = b"typedef struct Elf Elf;\n";

/// Text emitted right after [`MACRO_GUARD_LINE`].
pub const LIBELF_INCLUDE_BLOCK: &[u8] = b"\n#include <libelf.h>\n\n";

/// What the patch pass does with a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
	/// Copy the line verbatim.
	Keep,

	/// Copy the line, then write the extra text after it.
	InsertAfter(&'static [u8]),

	/// Write nothing for this line.
	Drop,
}

impl LineAction {
	/// Write the output for `line` according to this action.
	pub fn emit<W: Write>(self, line: &[u8], writer: &mut W) -> io::Result<()> {
		match self {
			LineAction::Keep => writer.write_all(line),
			LineAction::InsertAfter(extra) => {
				writer.write_all(line)?;
				writer.write_all(extra)
			}
			LineAction::Drop => Ok(()),
		}
	}
}

/// Classify one line, terminator included.
///
/// Matching is whole-line byte equality: trailing whitespace, a `\r\n`
/// terminator or a missing terminator all fall through to [`LineAction::Keep`].
pub fn classify_line(line: &[u8]) -> LineAction {
	if line == MACRO_GUARD_LINE {
		LineAction::InsertAfter(LIBELF_INCLUDE_BLOCK)
	} else if line == ELF_TYPEDEF_LINE {
		LineAction::Drop
	} else {
		LineAction::Keep
	}
}
