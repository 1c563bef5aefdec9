//! Cell kinds and the per-cell drift sign

/// Raw kind id as exposed across the wasm boundary.
pub type KindId = u8;

pub const KIND_AIR: KindId = 0;
pub const KIND_SOLID: KindId = 1;
pub const KIND_WATER: KindId = 2;

/// Horizontal drift sign carried by a Water cell: -1, 0 or +1.
/// Always 0 for Air and Solid cells.
pub type VelocitySign = i8;

/// Discrete state of a grid cell.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Air = 0,
    Solid = 1,
    Water = 2,
}

impl CellKind {
    /// Decode a kind id coming from JS; unknown ids are rejected.
    #[inline]
    pub fn from_id(id: KindId) -> Option<CellKind> {
        match id {
            KIND_AIR => Some(CellKind::Air),
            KIND_SOLID => Some(CellKind::Solid),
            KIND_WATER => Some(CellKind::Water),
            _ => None,
        }
    }

    #[inline]
    pub fn id(self) -> KindId {
        self as KindId
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ids_round_trip() {
        for kind in [CellKind::Air, CellKind::Solid, CellKind::Water] {
            assert_eq!(CellKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(CellKind::from_id(3), None);
        assert_eq!(CellKind::from_id(255), None);
    }
}
