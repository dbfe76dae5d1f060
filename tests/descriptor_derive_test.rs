//! Tests for `#[derive(Descriptor)]` and hand-written descriptor impls.

use capmath::prelude::*;
use capmath::{hops, ops};

// =============================================================================
// Backend context reaches the terminal through the upcast
// =============================================================================

#[derive(Descriptor)]
#[descriptor(terminal(ops::Remainder))]
struct Device {
    /// Scales every result, standing in for device state.
    gain: f64,
}

impl RemainderKernel<f64, f64> for Device {
    type Output = f64;

    fn remainder(&self, x: f64, y: f64) -> f64 {
        self.gain * (x - (x / y).round_ties_even() * y)
    }
}

#[derive(Descriptor)]
#[descriptor(inherit(ops::Remainder))]
struct Stream {
    id: u32,
    #[ancestor]
    device: Device,
}

#[test]
fn test_context_carried_to_terminal() {
    let s = Stream { id: 7, device: Device { gain: 10.0 } };
    assert_eq!(s.id, 7);
    assert_eq!(remainder(&s, 5.5_f64, 2.0_f64), -5.0);
}

// =============================================================================
// Generic refinements
// =============================================================================

#[derive(Descriptor)]
#[descriptor(inherit(Remainder))]
struct Tagged<B> {
    #[ancestor]
    base: B,
    tag: &'static str,
}

#[test]
fn test_generic_refinement() {
    let t = Tagged { base: Device { gain: 1.0 }, tag: "queue-0" };
    assert_eq!(t.tag, "queue-0");
    assert_eq!(remainder(&t, 5.5_f64, 2.0_f64), -0.5);
    assert_eq!(hops::<Remainder, Tagged<Device>, (f64, f64)>(), 1);

    let nested = Tagged { base: t, tag: "outer" };
    assert_eq!(remainder(&nested, 5.5_f64, 2.0_f64), -0.5);
    assert_eq!(hops::<Remainder, Tagged<Tagged<Device>>, (f64, f64)>(), 2);
}

// =============================================================================
// Split route attributes
// =============================================================================

#[derive(Descriptor)]
#[descriptor(terminal(Abs))]
#[descriptor(inherit(Remainder))]
struct Split(#[ancestor] Device);

impl AbsKernel<i32> for Split {
    type Output = u32;

    fn abs(&self, x: i32) -> u32 {
        x.unsigned_abs()
    }
}

#[test]
fn test_split_attributes_merge() {
    let s = Split(Device { gain: 2.0 });
    assert_eq!(abs(&s, -4_i32), 4_u32);
    assert_eq!(remainder(&s, 5.5_f64, 2.0_f64), -1.0);
}

// =============================================================================
// Hand-written impls, no derive
// =============================================================================

struct ManualRoot;

impl capmath::Descriptor for ManualRoot {}

impl Route<Floor> for ManualRoot {
    type Via = Terminal;
}

impl FloorKernel<f64> for ManualRoot {
    type Output = i64;

    fn floor(&self, x: f64) -> i64 {
        x.floor() as i64
    }
}

struct ManualChild {
    root: ManualRoot,
}

impl capmath::Descriptor for ManualChild {}

impl Refinement for ManualChild {
    type Ancestor = ManualRoot;

    fn ancestor(&self) -> &ManualRoot {
        &self.root
    }
}

impl Route<Floor> for ManualChild {
    type Via = Inherit;
}

#[test]
fn test_manual_impls() {
    let c = ManualChild { root: ManualRoot };
    assert_eq!(floor(&ManualRoot, -1.5_f64), -2);
    assert_eq!(floor(&c, 2.9_f64), 2);
    assert_eq!(hops::<Floor, ManualChild, (f64,)>(), 1);
}
