use kindred_core::{FamilyTree, Gender, Member, MemberId};

pub fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
    }
}

/// One member as a JSON object, children sorted for stable output.
pub fn member_json(tree: &FamilyTree, id: MemberId, member: &Member) -> serde_json::Value {
    let mut children: Vec<u32> = tree
        .get_children(id)
        .map(|c| c.iter().map(|m| m.as_u32()).collect())
        .unwrap_or_default();
    children.sort_unstable();
    serde_json::json!({
        "id": id.as_u32(),
        "name": member.name,
        "gender": member.gender,
        "father": member.father.map(MemberId::as_u32),
        "mother": member.mother.map(MemberId::as_u32),
        "children": children,
    })
}

/// The classic multi-line member card: name, gender, named parents, children.
pub fn member_card(tree: &FamilyTree, id: MemberId, member: &Member) -> String {
    let mut out = String::new();
    out.push_str(&format!("    Name: {}\n", member.name));
    out.push_str(&format!("  Gender: {}\n", gender_label(member.gender)));
    if let Some(father) = member.father {
        if let Ok(m) = tree.get_member(father) {
            out.push_str(&format!("  Father: {} ({father})\n", m.name));
        }
    }
    if let Some(mother) = member.mother {
        if let Ok(m) = tree.get_member(mother) {
            out.push_str(&format!("  Mother: {} ({mother})\n", m.name));
        }
    }
    if let Ok(children) = tree.get_children(id) {
        if !children.is_empty() {
            out.push_str("Children:\n");
            let mut sorted: Vec<MemberId> = children.iter().copied().collect();
            sorted.sort_unstable();
            for child in sorted {
                if let Ok(m) = tree.get_member(child) {
                    out.push_str(&format!("\t{} ({child})\n", m.name));
                }
            }
        }
    }
    out
}
