use std::collections::{HashMap, VecDeque};
use std::io::Write;

use crate::error::TreeError;
use crate::model::MemberId;
use crate::tree::FamilyTree;

/// Encode every member of the tree to `out` in topological order.
///
/// Each record: name bytes + NUL, gender byte, father position, mother
/// position (little-endian u32, 1-based position in the emission order,
/// 0 = none). Parentless members seed the order; the order among them is
/// whatever the member map yields, so byte streams for the same tree may
/// differ between runs while decoding to the same structure.
pub fn encode<W: Write>(tree: &FamilyTree, out: &mut W) -> Result<(), TreeError> {
    let order = topological_order(tree);

    // Remap original identity to 1-based emission position.
    let mut positions: HashMap<MemberId, u32> = HashMap::with_capacity(order.len());
    for (index, id) in order.iter().enumerate() {
        positions.insert(*id, index as u32 + 1);
    }
    let position_of = |id: Option<MemberId>| -> u32 {
        id.and_then(|p| positions.get(&p).copied()).unwrap_or(0)
    };

    for id in &order {
        let member = tree.get_member(*id)?;
        out.write_all(member.name.as_bytes())?;
        out.write_all(&[0u8, member.gender.to_byte()])?;
        out.write_all(&position_of(member.father).to_le_bytes())?;
        out.write_all(&position_of(member.mother).to_le_bytes())?;
    }
    Ok(())
}

/// Kahn's algorithm over the parent links: in-degree is the number of set
/// parent fields, the queue starts with all parentless members and drains
/// children as their parents are emitted.
fn topological_order(tree: &FamilyTree) -> Vec<MemberId> {
    let mut indegrees: HashMap<MemberId, u32> = HashMap::with_capacity(tree.len());
    let mut queue: VecDeque<MemberId> = VecDeque::new();
    for (id, member) in tree.iter() {
        let degree = member.father.is_some() as u32 + member.mother.is_some() as u32;
        indegrees.insert(id, degree);
        if degree == 0 {
            queue.push_back(id);
        }
    }

    let mut order = Vec::with_capacity(tree.len());
    while let Some(id) = queue.pop_front() {
        order.push(id);
        if let Ok(children) = tree.get_children(id) {
            for child in children {
                let degree = indegrees.entry(*child).or_insert(0);
                *degree = degree.saturating_sub(1);
                if *degree == 0 {
                    queue.push_back(*child);
                }
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender::{Female, Male};

    /// Minimal record parser used only to inspect encoder output.
    fn parse_records(mut bytes: &[u8]) -> Vec<(String, u8, u32, u32)> {
        let mut records = Vec::new();
        while !bytes.is_empty() {
            let nul = bytes.iter().position(|&b| b == 0).unwrap();
            let name = String::from_utf8(bytes[..nul].to_vec()).unwrap();
            let gender = bytes[nul + 1];
            let father = u32::from_le_bytes(bytes[nul + 2..nul + 6].try_into().unwrap());
            let mother = u32::from_le_bytes(bytes[nul + 6..nul + 10].try_into().unwrap());
            records.push((name, gender, father, mother));
            bytes = &bytes[nul + 10..];
        }
        records
    }

    #[test]
    fn single_member_record_layout() {
        let mut tree = FamilyTree::new();
        tree.add_member("Ada", Female, None, None).unwrap();
        let mut bytes = Vec::new();
        encode(&tree, &mut bytes).unwrap();

        let mut expected = b"Ada\0".to_vec();
        expected.push(1); // female
        expected.extend_from_slice(&0u32.to_le_bytes());
        expected.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn parents_are_emitted_before_children() {
        let mut tree = FamilyTree::new();
        let gpa = tree.add_member("Gpa", Male, None, None).unwrap();
        let dad = tree.add_member("Dad", Male, Some(gpa), None).unwrap();
        let mom = tree.add_member("Mom", Female, None, None).unwrap();
        tree.add_member("Kid", Male, Some(dad), Some(mom)).unwrap();

        let mut bytes = Vec::new();
        encode(&tree, &mut bytes).unwrap();
        let records = parse_records(&bytes);
        assert_eq!(records.len(), 4);

        let position_of =
            |name: &str| records.iter().position(|(n, ..)| n == name).unwrap() as u32 + 1;

        // Every referenced parent position points at an earlier record.
        for (i, (_, _, father, mother)) in records.iter().enumerate() {
            for p in [father, mother] {
                if *p != 0 {
                    assert!(*p <= i as u32, "parent position {p} not before record {i}");
                }
            }
        }

        let (_, _, kid_father, kid_mother) = records[position_of("Kid") as usize - 1];
        assert_eq!(kid_father, position_of("Dad"));
        assert_eq!(kid_mother, position_of("Mom"));
        let (_, _, dad_father, dad_mother) = records[position_of("Dad") as usize - 1];
        assert_eq!(dad_father, position_of("Gpa"));
        assert_eq!(dad_mother, 0);
    }

    #[test]
    fn topological_order_covers_every_member() {
        let mut tree = FamilyTree::new();
        let a = tree.add_member("A", Male, None, None).unwrap();
        let b = tree.add_member("B", Female, None, None).unwrap();
        tree.add_member("C", Male, Some(a), Some(b)).unwrap();
        tree.add_member("D", Female, Some(a), None).unwrap();

        let order = topological_order(&tree);
        assert_eq!(order.len(), tree.len());
    }
}
