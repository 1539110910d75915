use std::collections::{HashMap, HashSet};

use crate::error::TreeError;
use crate::model::{Gender, Member, MemberId};

use super::allocator::IdAllocator;

/// A member record together with its derived children index.
#[derive(Debug, Clone)]
struct Entry {
    member: Member,
    children: HashSet<MemberId>,
}

/// Which parent slot of a member a relink targets.
#[derive(Debug, Clone, Copy)]
enum ParentSlot {
    Father,
    Mother,
}

impl ParentSlot {
    fn for_gender(gender: Gender) -> Self {
        match gender {
            Gender::Male => ParentSlot::Father,
            Gender::Female => ParentSlot::Mother,
        }
    }
}

/// The genealogy graph: members keyed by identity, plus a children index
/// maintained alongside the authoritative father/mother fields.
///
/// Invariant: after every mutating operation, `id` is in
/// `get_children(parent)` exactly when the member's father or mother field
/// equals `parent`. Every parent-field write goes through [`Self::relink`],
/// the single choke point that keeps the index in step.
#[derive(Debug, Default)]
pub struct FamilyTree {
    members: HashMap<MemberId, Entry>,
    allocator: IdAllocator,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            allocator: IdAllocator::new(),
        }
    }

    /// Number of live members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All live members in unspecified (map) order.
    pub fn iter(&self) -> impl Iterator<Item = (MemberId, &Member)> + '_ {
        self.members.iter().map(|(id, e)| (*id, &e.member))
    }

    /// Add a member, allocating the smallest free identity.
    ///
    /// A given father must exist and be male, a mother female; both checks
    /// run before any identity is allocated or state touched.
    pub fn add_member(
        &mut self,
        name: impl Into<String>,
        gender: Gender,
        father: Option<MemberId>,
        mother: Option<MemberId>,
    ) -> Result<MemberId, TreeError> {
        // A missing parent and a wrong-gendered one are the same failure
        // here, unlike connect_parent where a missing parent is NotFound.
        if let Some(f) = father {
            if self.members.get(&f).map(|e| e.member.gender) != Some(Gender::Male) {
                return Err(TreeError::InvalidParent(format!(
                    "father {f} must be a living male member"
                )));
            }
        }
        if let Some(m) = mother {
            if self.members.get(&m).map(|e| e.member.gender) != Some(Gender::Female) {
                return Err(TreeError::InvalidParent(format!(
                    "mother {m} must be a living female member"
                )));
            }
        }

        let id = self.allocator.allocate();
        self.members.insert(
            id,
            Entry {
                member: Member {
                    name: name.into(),
                    gender,
                    father: None,
                    mother: None,
                },
                children: HashSet::new(),
            },
        );
        self.relink(id, ParentSlot::Father, father)?;
        self.relink(id, ParentSlot::Mother, mother)?;
        Ok(id)
    }

    pub fn member_exists(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    pub fn get_member(&self, id: MemberId) -> Result<&Member, TreeError> {
        self.members
            .get(&id)
            .map(|e| &e.member)
            .ok_or(TreeError::NotFound { id })
    }

    /// First member with an exactly matching name, in unspecified iteration
    /// order. With duplicate names, which of them wins is arbitrary.
    pub fn find_member(&self, name: &str) -> Option<MemberId> {
        self.members
            .iter()
            .find(|(_, e)| e.member.name == name)
            .map(|(id, _)| *id)
    }

    pub fn get_children(&self, id: MemberId) -> Result<&HashSet<MemberId>, TreeError> {
        self.members
            .get(&id)
            .map(|e| &e.children)
            .ok_or(TreeError::NotFound { id })
    }

    /// Rename in place. Names are not indexed, so nothing else moves.
    pub fn set_name(&mut self, id: MemberId, name: impl Into<String>) -> Result<(), TreeError> {
        let entry = self.members.get_mut(&id).ok_or(TreeError::NotFound { id })?;
        entry.member.name = name.into();
        Ok(())
    }

    /// Link `parent` as the father or mother of `child`, according to the
    /// parent's gender. An existing occupant of that slot is disconnected
    /// first. Both members must exist.
    pub fn connect_parent(&mut self, child: MemberId, parent: MemberId) -> Result<(), TreeError> {
        let slot = ParentSlot::for_gender(self.get_member(parent)?.gender);
        if !self.member_exists(child) {
            return Err(TreeError::NotFound { id: child });
        }
        self.relink(child, slot, Some(parent))
    }

    /// Clear the father link, if any. No-op on an already empty slot.
    pub fn disconnect_father(&mut self, id: MemberId) -> Result<(), TreeError> {
        self.relink(id, ParentSlot::Father, None)
    }

    /// Clear the mother link, if any. No-op on an already empty slot.
    pub fn disconnect_mother(&mut self, id: MemberId) -> Result<(), TreeError> {
        self.relink(id, ParentSlot::Mother, None)
    }

    /// Detach every child of `id`, on the father side if `id` is male and
    /// the mother side otherwise.
    pub fn disconnect_children(&mut self, id: MemberId) -> Result<(), TreeError> {
        let gender = self.get_member(id)?.gender;
        let slot = ParentSlot::for_gender(gender);
        // Snapshot: relink mutates the children set being walked.
        let children: Vec<MemberId> = self.get_children(id)?.iter().copied().collect();
        for child in children {
            self.relink(child, slot, None)?;
        }
        Ok(())
    }

    /// Remove a member: detach all children, detach own parents, erase the
    /// record, and hand its identity back for reuse.
    pub fn remove_member(&mut self, id: MemberId) -> Result<(), TreeError> {
        self.disconnect_children(id)?;
        self.disconnect_father(id)?;
        self.disconnect_mother(id)?;
        self.members.remove(&id);
        self.allocator.release(id);
        Ok(())
    }

    /// All live members, ascending by identity.
    pub fn list_members(&self) -> Vec<(MemberId, &Member)> {
        let mut v: Vec<(MemberId, &Member)> = self.iter().collect();
        v.sort_by_key(|(id, _)| *id);
        v
    }

    /// Drop every member and reset the allocator (next identity = 1).
    pub fn clear(&mut self) {
        self.members.clear();
        self.allocator.reset();
    }

    /// The one place a parent field is written. Detaches the child from the
    /// old occupant's children set and indexes it under the new one, so the
    /// derived index can never diverge from the fields.
    fn relink(
        &mut self,
        child: MemberId,
        slot: ParentSlot,
        new_parent: Option<MemberId>,
    ) -> Result<(), TreeError> {
        let entry = self
            .members
            .get_mut(&child)
            .ok_or(TreeError::NotFound { id: child })?;
        let field = match slot {
            ParentSlot::Father => &mut entry.member.father,
            ParentSlot::Mother => &mut entry.member.mother,
        };
        let old_parent = std::mem::replace(field, new_parent);

        if let Some(old) = old_parent {
            if let Some(e) = self.members.get_mut(&old) {
                e.children.remove(&child);
            }
        }
        if let Some(new) = new_parent {
            if let Some(e) = self.members.get_mut(&new) {
                e.children.insert(child);
            }
        }
        Ok(())
    }
}
