use std::io::{BufRead, ErrorKind};

use crate::error::TreeError;
use crate::model::{Gender, MemberId};
use crate::tree::FamilyTree;

/// Decode records from `input`, appending each through
/// [`FamilyTree::add_member`]. Returns the number of members read.
///
/// Parent positions in the stream (1-based, 0 = none) are taken at face
/// value as the identities the allocator will assign during this pass, which
/// holds exactly when the tree was empty at the start of the read. The only
/// clean stop is end-of-stream right at a record boundary; anything else is
/// [`TreeError::InvalidFormat`].
pub fn decode<R: BufRead>(tree: &mut FamilyTree, input: &mut R) -> Result<usize, TreeError> {
    let mut count = 0;
    loop {
        let mut name_bytes = Vec::new();
        let read = input.read_until(0, &mut name_bytes)?;
        if read == 0 {
            // End of stream before a new record began.
            return Ok(count);
        }
        if name_bytes.last() != Some(&0) {
            return Err(TreeError::InvalidFormat(
                "end of stream inside a name".to_string(),
            ));
        }
        name_bytes.pop();
        let name = String::from_utf8(name_bytes)
            .map_err(|_| TreeError::InvalidFormat("name is not valid UTF-8".to_string()))?;

        let mut gender_byte = [0u8; 1];
        read_field(input, &mut gender_byte, "gender byte")?;
        let gender = Gender::from_byte(gender_byte[0]).ok_or_else(|| {
            TreeError::InvalidFormat(format!("unknown gender byte {}", gender_byte[0]))
        })?;

        let mut father_bytes = [0u8; 4];
        read_field(input, &mut father_bytes, "father identity")?;
        let mut mother_bytes = [0u8; 4];
        read_field(input, &mut mother_bytes, "mother identity")?;
        let father = u32::from_le_bytes(father_bytes);
        let mother = u32::from_le_bytes(mother_bytes);

        tree.add_member(
            name,
            gender,
            MemberId::from_raw(father),
            MemberId::from_raw(mother),
        )?;
        count += 1;
    }
}

/// `read_exact` with mid-record truncation reported as a format error
/// rather than a bare IO error.
fn read_field<R: BufRead>(input: &mut R, buf: &mut [u8], what: &str) -> Result<(), TreeError> {
    input.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => {
            TreeError::InvalidFormat(format!("end of stream while reading {what}"))
        }
        _ => TreeError::Io(e),
    })
}
