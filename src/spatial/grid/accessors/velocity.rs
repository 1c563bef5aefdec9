use super::super::*;

impl CellGrid {
    pub fn velocity(&self, x: u32, y: u32) -> Result<VelocitySign, EngineError> {
        Ok(self.vx[self.checked_index(x, y)?])
    }

    /// Set a Water cell's drift sign. Meaningful only for Water; the sign of
    /// any other kind is pinned to 0 and the write is ignored.
    pub fn set_velocity(&mut self, x: u32, y: u32, sign: VelocitySign) -> Result<(), EngineError> {
        debug_assert!((-1..=1).contains(&sign), "drift sign out of range: {sign}");
        let idx = self.checked_index(x, y)?;
        if self.kinds[idx] == CellKind::Water {
            self.vx[idx] = sign;
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn velocity_at(&self, x: u32, y: u32) -> VelocitySign {
        self.vx[self.index(x, y)]
    }

    #[inline]
    pub(crate) fn put_velocity(&mut self, x: u32, y: u32, sign: VelocitySign) {
        debug_assert!((-1..=1).contains(&sign), "drift sign out of range: {sign}");
        let idx = self.index(x, y);
        self.vx[idx] = sign;
    }
}
