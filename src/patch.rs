//! The patch pass: stream lines from the generated header to the output,
//! applying the line rules as they go.

use crate::error::{FixupError, Result};
use crate::rules::{LineAction, classify_line};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Counters describing what a patch pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchStats {
	/// Lines read from the input, including a final unterminated line.
	pub lines_read: usize,

	/// Input lines copied to the output (inserted text not counted).
	pub lines_written: usize,

	/// Number of `#include <libelf.h>` blocks inserted.
	pub includes_inserted: usize,

	/// Number of `typedef struct Elf Elf;` lines removed.
	pub typedefs_removed: usize,
}

/// Which side of the pass an I/O error came from.
enum PassError {
	Read(io::Error),
	Write(io::Error),
}

impl PassError {
	fn into_fixup_error(self, input_path: &Path, output_path: &Path) -> FixupError {
		match self {
			PassError::Read(source) => FixupError::Read {
				path: input_path.to_path_buf(),
				source,
			},
			PassError::Write(source) => FixupError::Write {
				path: output_path.to_path_buf(),
				source,
			},
		}
	}
}

fn run_pass<R: BufRead, W: Write>(
	reader: &mut R,
	writer: &mut W,
) -> std::result::Result<PatchStats, PassError> {
	let mut stats = PatchStats::default();
	let mut line = Vec::new();

	loop {
		line.clear();
		let read = reader.read_until(b'\n', &mut line).map_err(PassError::Read)?;
		if read == 0 {
			break;
		}
		stats.lines_read += 1;

		let action = classify_line(&line);
		match action {
			LineAction::Keep => stats.lines_written += 1,
			LineAction::InsertAfter(_) => {
				stats.lines_written += 1;
				stats.includes_inserted += 1;
			}
			LineAction::Drop => stats.typedefs_removed += 1,
		}
		action.emit(&line, writer).map_err(PassError::Write)?;
	}

	writer.flush().map_err(PassError::Write)?;
	Ok(stats)
}

/// Run the patch pass from `reader` to `writer`.
///
/// Lines are handled as raw bytes, so the output is byte-identical to the
/// input apart from the two rule lines. The writer is flushed before
/// returning. The first I/O error aborts the pass; whatever was already
/// written stays written.
pub fn patch_stream<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> io::Result<PatchStats> {
	run_pass(&mut reader, &mut writer).map_err(|e| match e {
		PassError::Read(e) | PassError::Write(e) => e,
	})
}

/// Patch the header at `input_path`, writing the result to `output_path`.
///
/// The output file is created or truncated. It is written in place, with no
/// temporary file, so a failure part way through leaves partial output behind.
/// Both files are closed before this returns, on success or failure.
pub fn patch(input_path: &Path, output_path: &Path) -> Result<PatchStats> {
	let input = File::open(input_path).map_err(|source| FixupError::OpenInput {
		path: input_path.to_path_buf(),
		source,
	})?;
	let output = File::create(output_path).map_err(|source| FixupError::CreateOutput {
		path: output_path.to_path_buf(),
		source,
	})?;

	let mut reader = BufReader::new(input);
	let mut writer = BufWriter::new(output);

	run_pass(&mut reader, &mut writer).map_err(|e| e.into_fixup_error(input_path, output_path))
}
