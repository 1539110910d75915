//! Ancestor traversal and kinship naming.
//!
//! The distance map is deliberately NOT a shortest-path computation: the walk
//! recurses the father subtree fully, then the mother subtree, and records
//! each visited ancestor's depth post-order, so an ancestor reachable along
//! both lines keeps the depth of whichever visit happened last. The kinship
//! labels below are defined in terms of exactly that map, and downstream
//! tests pin the behavior.

use std::collections::HashMap;

use crate::error::TreeError;
use crate::model::{Gender, MemberId};
use crate::tree::FamilyTree;

impl FamilyTree {
    /// Generation distance from `id` to each of its ancestors (including
    /// itself at distance 0), last-write-wins per recursive visit order.
    pub fn ancestor_distances(&self, id: MemberId) -> Result<HashMap<MemberId, u32>, TreeError> {
        if !self.member_exists(id) {
            return Err(TreeError::NotFound { id });
        }
        let mut distances = HashMap::new();
        self.walk_ancestors(id, 0, &mut distances);
        Ok(distances)
    }

    fn walk_ancestors(&self, id: MemberId, depth: u32, distances: &mut HashMap<MemberId, u32>) {
        let Ok(member) = self.get_member(id) else {
            return;
        };
        if let Some(father) = member.father {
            self.walk_ancestors(father, depth + 1, distances);
        }
        if let Some(mother) = member.mother {
            self.walk_ancestors(mother, depth + 1, distances);
        }
        distances.insert(id, depth);
    }

    /// English kinship term describing what `object` is to `subject`
    /// ("father", "half-sister", "2nd cousin once removed", ...).
    ///
    /// The common ancestor is the one minimizing the subject's distance;
    /// among equal-minimum candidates the tie-break is arbitrary (map
    /// iteration order).
    pub fn get_relationship(
        &self,
        subject: MemberId,
        object: MemberId,
    ) -> Result<String, TreeError> {
        let subject_ancestors = self.ancestor_distances(subject)?;
        let object_ancestors = self.ancestor_distances(object)?;

        let mut nearest: Option<MemberId> = None;
        let mut nearest_distance = u32::MAX;
        for (&ancestor, &distance) in &subject_ancestors {
            if object_ancestors.contains_key(&ancestor) && distance < nearest_distance {
                nearest = Some(ancestor);
                nearest_distance = distance;
            }
        }
        let ancestor = nearest.ok_or(TreeError::NoCommonAncestor)?;

        let d_subject = subject_ancestors[&ancestor];
        let d_object = object_ancestors[&ancestor];
        let min = d_subject.min(d_object);
        let diff = d_subject.abs_diff(d_object);
        let object_lower = d_object > d_subject;
        let object_gender = self.get_member(object)?.gender;

        let label = match min {
            0 => lineal_label(diff, object_lower, object_gender),
            1 if diff == 0 => self.sibling_label(subject, object, object_gender)?,
            1 => avuncular_label(diff, object_lower, object_gender),
            _ => cousin_label(min, diff),
        };
        Ok(label)
    }

    /// Same generation, shared parent: brother/sister, "half-" unless the
    /// two verifiably share both parents.
    fn sibling_label(
        &self,
        subject: MemberId,
        object: MemberId,
        gender: Gender,
    ) -> Result<String, TreeError> {
        let s = self.get_member(subject)?;
        let o = self.get_member(object)?;
        let half = s.father.is_none()
            || o.mother.is_none()
            || s.father != o.father
            || s.mother != o.mother;
        let mut label = String::new();
        if half {
            label.push_str("half-");
        }
        label.push_str(match gender {
            Gender::Male => "brother",
            Gender::Female => "sister",
        });
        Ok(label)
    }
}

/// Direct line: self, (great-)*(grand)father/mother/son/daughter.
fn lineal_label(diff: u32, object_lower: bool, gender: Gender) -> String {
    if diff == 0 {
        return "self".to_string();
    }
    let mut label = "great-".repeat(diff.saturating_sub(2) as usize);
    if diff >= 2 {
        label.push_str("grand");
    }
    label.push_str(match (gender, object_lower) {
        (Gender::Male, true) => "son",
        (Gender::Male, false) => "father",
        (Gender::Female, true) => "daughter",
        (Gender::Female, false) => "mother",
    });
    label
}

/// Uncle/aunt/nephew/niece line, with "great-" per extra generation.
fn avuncular_label(diff: u32, object_lower: bool, gender: Gender) -> String {
    let mut label = "great-".repeat(diff.saturating_sub(1) as usize);
    label.push_str(match (gender, object_lower) {
        (Gender::Male, true) => "nephew",
        (Gender::Male, false) => "uncle",
        (Gender::Female, true) => "niece",
        (Gender::Female, false) => "aunt",
    });
    label
}

/// Cousin line: ordinal degree (min − 1) when beyond first cousins, plus a
/// removal suffix for the generation gap.
fn cousin_label(min: u32, diff: u32) -> String {
    let mut label = String::new();
    if min > 2 {
        label.push_str(&ordinal(min - 1));
        label.push(' ');
    }
    label.push_str("cousin");
    match diff {
        0 => {}
        1 => label.push_str(" once removed"),
        2 => label.push_str(" twice removed"),
        3 => label.push_str(" thrice removed"),
        n => label.push_str(&format!(" {n}x removed")),
    }
    label
}

/// English ordinal: 1st, 2nd, 3rd, 4th... with teens always taking "th".
fn ordinal(n: u32) -> String {
    let suffix = if (n / 10) % 10 == 1 {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}
