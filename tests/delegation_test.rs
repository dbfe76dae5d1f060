//! Tests for routing operations through descriptor chains.

use std::cell::Cell;

use capmath::prelude::*;

// =============================================================================
// Recording terminal
// =============================================================================

/// Root descriptor that records every kernel call.
#[derive(Default, Descriptor)]
#[descriptor(terminal(Remainder, Sqrt))]
struct Recorder {
    calls: Cell<usize>,
    last: Cell<Option<(f64, f64)>>,
}

impl RemainderKernel<f64, f64> for Recorder {
    type Output = f64;

    fn remainder(&self, x: f64, y: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.last.set(Some((x, y)));
        x - (x / y).round_ties_even() * y
    }
}

impl SqrtKernel<f64> for Recorder {
    type Output = f64;

    fn sqrt(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        x.sqrt()
    }
}

#[derive(Default, Descriptor)]
#[descriptor(inherit(Remainder, Sqrt))]
struct Level2 {
    #[ancestor]
    base: Recorder,
}

#[derive(Default, Descriptor)]
#[descriptor(inherit(Remainder, Sqrt))]
struct Level3(#[ancestor] Level2);

// =============================================================================
// Direct terminal
// =============================================================================

#[test]
fn test_terminal_invoked_once_with_unchanged_operands() {
    let d = Recorder::default();
    let r = remainder(&d, 5.5_f64, 2.0_f64);

    assert_eq!(r, -0.5);
    assert_eq!(d.calls.get(), 1);
    assert_eq!(d.last.get(), Some((5.5, 2.0)));
}

// =============================================================================
// Delegation
// =============================================================================

#[test]
fn test_single_hop_is_value_transparent() {
    let d2 = Level2::default();
    let via_child = remainder(&d2, 7.25_f64, 3.0_f64);
    let via_upcast = remainder(d2.ancestor(), 7.25_f64, 3.0_f64);

    assert_eq!(via_child, via_upcast);
    assert_eq!(d2.base.calls.get(), 2);
    assert_eq!(d2.base.last.get(), Some((7.25, 3.0)));
}

#[test]
fn test_three_level_chain_reaches_root() {
    let d3 = Level3::default();
    let r = remainder(&d3, 5.5_f64, 2.0_f64);

    assert_eq!(r, -0.5);
    assert_eq!(d3.0.base.calls.get(), 1);
    assert_eq!(d3.0.base.last.get(), Some((5.5, 2.0)));
    assert_eq!(sqrt(&d3, 16.0_f64), 4.0);
    assert_eq!(d3.0.base.calls.get(), 2);
}

#[test]
fn test_upcast_reaches_embedded_ancestor() {
    let d3 = Level3::default();
    let root: &Recorder = d3.ancestor().ancestor();
    assert!(std::ptr::eq(root, &d3.0.base));
}

// =============================================================================
// Siblings
// =============================================================================

#[derive(Default, Descriptor)]
#[descriptor(inherit(Remainder))]
struct SiblingA(#[ancestor] Recorder);

#[derive(Default, Descriptor)]
#[descriptor(inherit(Remainder))]
struct SiblingB(#[ancestor] Recorder);

#[test]
fn test_siblings_resolve_independently() {
    let a = SiblingA::default();
    let b = SiblingB::default();

    assert_eq!(remainder(&a, 5.5_f64, 2.0_f64), -0.5);
    assert_eq!(remainder(&b, 9.0_f64, 4.0_f64), 1.0);
    assert_eq!(remainder(&b, 9.0_f64, 4.0_f64), 1.0);

    assert_eq!(a.0.calls.get(), 1);
    assert_eq!(a.0.last.get(), Some((5.5, 2.0)));
    assert_eq!(b.0.calls.get(), 2);
    assert_eq!(b.0.last.get(), Some((9.0, 4.0)));
}

// =============================================================================
// Own terminal wins over ancestor
// =============================================================================

#[derive(Default, Descriptor)]
#[descriptor(terminal(Remainder), inherit(Sqrt))]
struct Override {
    #[ancestor]
    base: Recorder,
}

impl RemainderKernel<f64, f64> for Override {
    type Output = f64;

    fn remainder(&self, _x: f64, _y: f64) -> f64 {
        42.0
    }
}

#[test]
fn test_own_terminal_takes_precedence() {
    let d = Override::default();

    assert_eq!(remainder(&d, 5.5_f64, 2.0_f64), 42.0);
    assert_eq!(d.base.calls.get(), 0);

    assert_eq!(sqrt(&d, 9.0_f64), 3.0);
    assert_eq!(d.base.calls.get(), 1);
}

#[test]
fn test_refinement_above_override_stops_at_override() {
    #[derive(Default, Descriptor)]
    #[descriptor(inherit(Remainder, Sqrt))]
    struct Above(#[ancestor] Override);

    let d = Above::default();
    assert_eq!(remainder(&d, 5.5_f64, 2.0_f64), 42.0);
    assert_eq!(sqrt(&d, 25.0_f64), 5.0);
    assert_eq!(d.0.base.calls.get(), 1);
}

// =============================================================================
// Operand types
// =============================================================================

/// Root whose remainder accepts mixed operands and returns a pair.
#[derive(Descriptor)]
#[descriptor(terminal(Remainder))]
struct Euclid;

impl RemainderKernel<i64, u32> for Euclid {
    type Output = (i64, i64);

    fn remainder(&self, x: i64, y: u32) -> (i64, i64) {
        let y = i64::from(y);
        (x.div_euclid(y), x.rem_euclid(y))
    }
}

#[derive(Descriptor)]
#[descriptor(inherit(Remainder))]
struct EuclidAlias(#[ancestor] Euclid);

#[test]
fn test_operand_and_output_types_flow_through() {
    assert_eq!(remainder(&Euclid, -7_i64, 3_u32), (-3, 2));
    assert_eq!(remainder(&EuclidAlias(Euclid), -7_i64, 3_u32), (-3, 2));
}
