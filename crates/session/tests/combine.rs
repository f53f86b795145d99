//! Integration tests for combining entries across a session.

use atropos_calendar::{CycleMap, Doy};
use atropos_session::{CombineOutcome, Session};
use atropos_sode::{ConceptionPrior, GestationAgeRange, convolve_death_date};

fn session() -> Session {
    let cycle = CycleMap::new(Doy::from_month_day(8, 15).unwrap());
    Session::new(ConceptionPrior::uniform(), cycle)
}

fn add(s: &mut Session, label: &str, lo: u16, hi: u16) -> atropos_session::EntryId {
    s.add_measured(label, GestationAgeRange::new(lo, hi).unwrap())
        .unwrap()
}

#[test]
fn order_independent() {
    let mut s = session();
    let a = add(&mut s, "a", 100, 200);
    let b = add(&mut s, "b", 150, 250);
    let c = add(&mut s, "c", 120, 180);

    let mut fused = Vec::new();
    for order in [[a, b, c], [c, b, a], [b, a, c]] {
        let CombineOutcome::Combined { id } = s.combine(&order).unwrap() else {
            panic!("expected a fused entry");
        };
        fused.push(id);
    }

    let first = s.entry(fused[0]).unwrap();
    for &id in &fused[1..] {
        let other = s.entry(id).unwrap();
        assert_eq!(other.range(), first.range());
        assert_eq!(other.calendar().probs(), first.calendar().probs());
    }
    assert_eq!(
        (first.range().min_day(), first.range().max_day()),
        (150, 180)
    );
}

#[test]
fn idempotent_over_the_same_set() {
    let mut s = session();
    let a = add(&mut s, "a", 60, 140);
    let b = add(&mut s, "b", 100, 180);

    let CombineOutcome::Combined { id: first } = s.combine(&[a, b]).unwrap() else {
        panic!("expected a fused entry");
    };
    let CombineOutcome::Combined { id: second } = s.combine(&[a, b]).unwrap() else {
        panic!("expected a fused entry");
    };

    let e1 = s.entry(first).unwrap();
    let e2 = s.entry(second).unwrap();
    assert_eq!(e1.range(), e2.range());
    assert_eq!(e1.calendar().probs(), e2.calendar().probs());
}

#[test]
fn disjoint_ranges_yield_zero_calendar() {
    let mut s = session();
    let a = add(&mut s, "a", 1, 50);
    let b = add(&mut s, "b", 100, 150);
    match s.combine(&[a, b]).unwrap() {
        CombineOutcome::EmptyIntersection {
            min_day,
            max_day,
            calendar,
        } => {
            assert_eq!((min_day, max_day), (100, 50));
            assert!(calendar.is_zero());
        }
        CombineOutcome::Combined { .. } => panic!("disjoint ranges must not fuse"),
    }
}

#[test]
fn identical_ranges_match_direct_convolution() {
    // Fusing two copies of the same range must equal convolving the range
    // directly.
    let mut s = session();
    let a = add(&mut s, "a", 50, 60);
    let b = add(&mut s, "b", 50, 60);
    let CombineOutcome::Combined { id } = s.combine(&[a, b]).unwrap() else {
        panic!("expected a fused entry");
    };

    let direct = convolve_death_date(
        s.prior(),
        GestationAgeRange::new(50, 60).unwrap(),
        s.cycle(),
    )
    .unwrap();
    assert_eq!(s.entry(id).unwrap().calendar().probs(), direct.probs());
}

#[test]
fn fused_entry_narrows_with_each_source() {
    let mut s = session();
    let a = add(&mut s, "a", 50, 300);
    let b = add(&mut s, "b", 100, 280);
    let c = add(&mut s, "c", 150, 260);

    let CombineOutcome::Combined { id: ab } = s.combine(&[a, b]).unwrap() else {
        panic!("expected a fused entry");
    };
    let CombineOutcome::Combined { id: abc } = s.combine(&[ab, c]).unwrap() else {
        panic!("expected a fused entry");
    };

    let wide = s.entry(ab).unwrap().range();
    let narrow = s.entry(abc).unwrap().range();
    assert!(narrow.width() < wide.width());
    assert_eq!((narrow.min_day(), narrow.max_day()), (150, 260));
}
