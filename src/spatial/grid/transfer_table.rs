//! Transfer bookkeeping for the advection phase
//!
//! The advection pass is data-parallel, but a naive port would have every
//! cell pushing records into other cells' ledgers at once. Instead each
//! cell writes only its own pair of write-once slots (forward shares and
//! reverse shares), and a single scatter pass folds them into per-source
//! record lists afterwards. All buffers are allocated once and reused
//! every step.

/// Up to four destination cells per bilinear split.
pub const STENCIL: usize = 4;

/// One accumulated transfer request: move `ratio` of a source cell's
/// contents to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransferRecord {
    pub target: u32,
    pub ratio: f64,
}

/// Fixed-capacity set of bilinear shares produced by one cell in one
/// advection pass. For a forward pass the entries name destination cells;
/// for a reverse pass they name origin cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShareSet {
    cells: [u32; STENCIL],
    ratios: [f64; STENCIL],
    len: u8,
}

impl ShareSet {
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn push(&mut self, cell: u32, ratio: f64) {
        debug_assert!((self.len as usize) < STENCIL);
        let slot = self.len as usize;
        if slot < STENCIL {
            self.cells[slot] = cell;
            self.ratios[slot] = ratio;
            self.len += 1;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        let n = self.len as usize;
        self.cells[..n].iter().copied().zip(self.ratios[..n].iter().copied())
    }
}

/// Reusable transfer buffers for one grid.
pub struct TransferTable {
    /// Forward shares, indexed by source cell: where this cell pushes.
    pub forward: Vec<ShareSet>,
    /// Reverse shares, indexed by pulling cell: who this cell pulls from.
    pub reverse: Vec<ShareSet>,
    /// Accumulated requests against each source cell.
    records: Vec<Vec<TransferRecord>>,
}

impl TransferTable {
    pub fn new(size: usize) -> Self {
        Self {
            forward: vec![ShareSet::default(); size],
            reverse: vec![ShareSet::default(); size],
            records: vec![Vec::new(); size],
        }
    }

    /// Fold forward and reverse shares into per-source record lists.
    /// Runs single-threaded; this is the race-free reduction between the
    /// parallel share computation and the transfer finalize.
    pub fn scatter(&mut self) {
        let TransferTable { forward, reverse, records } = self;

        for list in records.iter_mut() {
            list.clear(); // keep capacity
        }
        for (source, shares) in forward.iter().enumerate() {
            for (target, ratio) in shares.iter() {
                records[source].push(TransferRecord { target, ratio });
            }
        }
        for (puller, shares) in reverse.iter().enumerate() {
            for (origin, ratio) in shares.iter() {
                records[origin as usize].push(TransferRecord { target: puller as u32, ratio });
            }
        }
    }

    /// All transfer requests whose source is `source`.
    #[inline]
    pub fn records(&self, source: usize) -> &[TransferRecord] {
        &self.records[source]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_set_caps_at_stencil() {
        let mut set = ShareSet::default();
        for i in 0..STENCIL as u32 {
            set.push(i, 0.25);
        }
        assert_eq!(set.len(), STENCIL);
        assert_eq!(set.iter().map(|(_, r)| r).sum::<f64>(), 1.0);
    }

    #[test]
    fn scatter_routes_reverse_shares_to_their_origin() {
        let mut table = TransferTable::new(4);
        // Cell 0 pushes 30% of itself into cell 1.
        table.forward[0].push(1, 0.3);
        // Cell 2 pulls 50% of cell 0 toward itself.
        table.reverse[2].push(0, 0.5);
        table.scatter();

        let records = table.records(0);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], TransferRecord { target: 1, ratio: 0.3 });
        assert_eq!(records[1], TransferRecord { target: 2, ratio: 0.5 });
        assert!(table.records(1).is_empty());
        assert!(table.records(2).is_empty());
    }

    #[test]
    fn scatter_clears_previous_records() {
        let mut table = TransferTable::new(2);
        table.forward[0].push(1, 1.0);
        table.scatter();
        assert_eq!(table.records(0).len(), 1);

        table.forward[0].clear();
        table.scatter();
        assert!(table.records(0).is_empty());
    }
}
