use crate::record::{RecordId, RiverRecord};

/// In-memory dataset, in source row order.
///
/// The table is the only data store in the system: layout, picking, and the
/// tooltip all resolve back to it through [`RecordId`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiverTable {
    records: Vec<RiverRecord>,
}

impl RiverTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RiverRecord) -> RecordId {
        let id = RecordId(self.records.len() as u32);
        self.records.push(record);
        id
    }

    pub fn get(&self, id: RecordId) -> Option<&RiverRecord> {
        self.records.get(id.index() as usize)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates all rows in source order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &RiverRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, r)| (RecordId(idx as u32), r))
    }

    /// Iterates rows passing the eligibility filter, preserving source order.
    pub fn eligible(&self) -> impl Iterator<Item = (RecordId, &RiverRecord)> {
        self.iter().filter(|(_, r)| r.is_eligible())
    }

    pub fn eligible_count(&self) -> usize {
        self.eligible().count()
    }
}
