//! T-box tables fusing SubBytes with MixColumns.

use std::sync::OnceLock;

use aes_core::{mix_column, pack_word, rotate_bytes_left, sbox, Word};
use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

/// Entries per table, one per byte value.
pub const TABLE_ENTRIES: usize = 256;

/// One 256-entry T-box.
pub type Table = [Word; TABLE_ENTRIES];

static SHARED: OnceLock<TBoxes> = OnceLock::new();

/// The four T-boxes.
///
/// `t0[i]` is the MixColumns image of a column holding `SBOX[i]` in row 0 and zero
/// elsewhere. `t1`, `t2` and `t3` are `t0` rotated left by 3, 2 and 1 byte
/// positions, so a byte sitting in row `r` is looked up in the table rotated by `r`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TBoxes {
    /// Row-0 table.
    #[serde(with = "BigArray")]
    pub t0: Table,
    /// `t0` rotated by 3 bytes (row 3).
    #[serde(with = "BigArray")]
    pub t1: Table,
    /// `t0` rotated by 2 bytes (row 2).
    #[serde(with = "BigArray")]
    pub t2: Table,
    /// `t0` rotated by 1 byte (row 1).
    #[serde(with = "BigArray")]
    pub t3: Table,
}

impl TBoxes {
    /// Computes all four tables from the S-box.
    pub fn generate() -> Self {
        let mut tables = Self {
            t0: [0; TABLE_ENTRIES],
            t1: [0; TABLE_ENTRIES],
            t2: [0; TABLE_ENTRIES],
            t3: [0; TABLE_ENTRIES],
        };
        for i in 0..TABLE_ENTRIES {
            let t0 = mix_column(pack_word(sbox(i as u8), 0, 0, 0));
            tables.t0[i] = t0;
            tables.t1[i] = rotate_bytes_left(t0, 3);
            tables.t2[i] = rotate_bytes_left(t0, 2);
            tables.t3[i] = rotate_bytes_left(t0, 1);
        }
        tables
    }

    /// Returns table `Tn` for `n` in 0..=3.
    pub fn table(&self, index: usize) -> Option<&Table> {
        match index {
            0 => Some(&self.t0),
            1 => Some(&self.t1),
            2 => Some(&self.t2),
            3 => Some(&self.t3),
            _ => None,
        }
    }

    /// Looks up the contribution of `byte` sitting in `row` of a column.
    #[inline]
    pub fn row_lookup(&self, row: usize, byte: u8) -> Word {
        let idx = byte as usize;
        match row & 3 {
            0 => self.t0[idx],
            1 => self.t3[idx],
            2 => self.t2[idx],
            _ => self.t1[idx],
        }
    }

    /// Serializes the tables with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes tables with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Computes a fresh copy of the T-boxes.
pub fn generate_tables() -> TBoxes {
    TBoxes::generate()
}

/// Returns the process-wide tables, generating them on first use.
///
/// Concurrent first callers block until generation finishes; every caller sees
/// the same fully initialized tables.
pub fn tables() -> &'static TBoxes {
    SHARED.get_or_init(|| {
        log::debug!("generating T-box tables");
        TBoxes::generate()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_core::{mix_columns, State, SBOX};

    #[test]
    fn rotations_of_t0() {
        let t = generate_tables();
        for i in 0..TABLE_ENTRIES {
            assert_eq!(t.t1[i], t.t0[i].rotate_left(24), "t1[{i}]");
            assert_eq!(t.t2[i], t.t0[i].rotate_left(16), "t2[{i}]");
            assert_eq!(t.t3[i], t.t0[i].rotate_left(8), "t3[{i}]");
        }
    }

    #[test]
    fn t0_holds_doubled_and_tripled_sbox() {
        let t = generate_tables();
        for (i, &s) in SBOX.iter().enumerate() {
            let double = aes_core::xtime(s);
            assert_eq!(t.t0[i], pack_word(double, s, s, double ^ s));
        }
        // SBOX[0] = 0x63: 2*0x63 = 0xc6, 3*0x63 = 0xa5
        assert_eq!(t.t0[0], 0xa563_63c6);
    }

    #[test]
    fn row_lookup_matches_mixing_one_byte() {
        let t = generate_tables();
        for row in 0..4 {
            for byte in [0x00u8, 0x01, 0x53, 0x80, 0xff] {
                let mut state: State = [0; 4];
                state[0] = (sbox(byte) as Word) << (8 * row);
                mix_columns(&mut state);
                assert_eq!(t.row_lookup(row, byte), state[0]);
            }
        }
    }

    #[test]
    fn table_index_bounds() {
        let t = tables();
        assert_eq!(t.table(0), Some(&t.t0));
        assert_eq!(t.table(3), Some(&t.t3));
        assert!(t.table(4).is_none());
    }

    #[test]
    fn shared_tables_are_generated_once() {
        let a = tables();
        let b = tables();
        assert!(std::ptr::eq(a, b));
        assert_eq!(*a, generate_tables());
    }

    #[test]
    fn serialize_roundtrip() {
        let t = generate_tables();
        let bytes = t.to_bytes().expect("serialize");
        assert_eq!(bytes.len(), 4 * TABLE_ENTRIES * 4);
        let decoded = TBoxes::from_bytes(&bytes).expect("deserialize");
        assert_eq!(decoded, t);
        assert!(TBoxes::from_bytes(&bytes[..100]).is_err());
    }
}
