//! Binary persistence for [`FamilyTree`].
//!
//! On-disk layout is a bare sequence of records, no header or checksum:
//! NUL-terminated name, one gender byte (0 = male, 1 = female), then two
//! little-endian u32 parent positions (0 = none). Members are emitted in
//! topological order so every record's parents appear earlier in the stream.

pub mod read;
pub mod write;

pub use read::decode;
pub use write::encode;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::Path;

use crate::error::TreeError;
use crate::tree::FamilyTree;

impl FamilyTree {
    /// Write the whole tree to `path`, replacing any existing file.
    pub fn store_to_file(&self, path: impl AsRef<Path>) -> Result<(), TreeError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        encode(self, &mut out)?;
        out.flush()?;
        tracing::debug!(members = self.len(), path = %path.display(), "stored tree");
        Ok(())
    }

    /// Read records from `path`, appending them through [`Self::add_member`].
    ///
    /// Stored parent positions are 1-based positions within the file, and
    /// they line up with the identities the allocator hands out only when
    /// loading into an empty tree. That is a strict precondition: loading
    /// into a populated tree will attach parents to the wrong members.
    pub fn read_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), TreeError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut input = BufReader::new(file);
        let loaded = decode(self, &mut input)?;
        tracing::debug!(members = loaded, path = %path.display(), "loaded tree");
        Ok(())
    }
}
