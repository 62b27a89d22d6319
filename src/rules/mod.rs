//! Line rules for the libdwarf header fixup.
//!
//! This module handles:
//! - Recognising the two literal lines the fixup cares about
//! - Deciding what to emit for every other line

pub mod line;

pub use line::{
	ELF_TYPEDEF_LINE, LIBELF_INCLUDE_BLOCK, LineAction, MACRO_GUARD_LINE, classify_line,
};
