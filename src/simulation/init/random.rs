use crate::systems::xorshift32;

/// Uniform Fisher-Yates shuffle driven by xorshift32. Applied to the drained
/// queue each tick so processing order carries no directional bias from
/// insertion order.
pub(super) fn shuffle<T>(items: &mut [T], state: &mut u32) {
    for len in (1..=items.len()).rev() {
        let pick = (xorshift32(state) as usize) % len;
        items.swap(len - 1, pick);
    }
}
