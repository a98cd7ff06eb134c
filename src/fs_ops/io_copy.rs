//! Streaming copy used by the cross-filesystem fallback.
//!
//! - Writes to a newly created destination file (O_EXCL semantics; never clobbers).
//! - Buffered I/O with large (1 MiB) buffers to reduce syscall count.
//! - Syncs the written file to stable storage before returning.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024;

/// Copy `src` -> `dst`, then fsync `dst`. Returns the number of bytes written.
/// Callers are responsible for syncing the parent directory after the final rename.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(bytes)
}
