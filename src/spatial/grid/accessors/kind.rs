use super::super::*;

impl CellGrid {
    // === Contract access (bounds-checked) ===

    pub fn kind(&self, x: u32, y: u32) -> Result<CellKind, EngineError> {
        Ok(self.kinds[self.checked_index(x, y)?])
    }

    /// Set a cell's kind. The solid ring is not a valid write target for
    /// anything but Solid. Writing a non-Water kind clears the drift sign.
    pub fn set_kind(&mut self, x: u32, y: u32, kind: CellKind) -> Result<(), EngineError> {
        let idx = self.checked_index(x, y)?;
        if !self.is_interior(x, y) && kind != CellKind::Solid {
            return Err(EngineError::InvalidCoordinate {
                x: x as i64,
                y: y as i64,
            });
        }
        self.kinds[idx] = kind;
        if kind != CellKind::Water {
            self.vx[idx] = 0;
        }
        Ok(())
    }

    // === Hot-path access (coordinates pre-validated by the caller) ===

    #[inline]
    pub(crate) fn kind_at(&self, x: u32, y: u32) -> CellKind {
        self.kinds[self.index(x, y)]
    }

    #[inline]
    pub(crate) fn put_kind(&mut self, x: u32, y: u32, kind: CellKind) {
        let idx = self.index(x, y);
        self.kinds[idx] = kind;
        if kind != CellKind::Water {
            self.vx[idx] = 0;
        }
    }
}
