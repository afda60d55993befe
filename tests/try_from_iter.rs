use std::{
    cell::Cell,
    iter,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};

use array_try_from_iter::{try_from_iter, IntoIter, IteratorExt};

/// Counts how many times it has been dropped.
#[derive(Debug)]
struct Tracked(Rc<Cell<usize>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn tracked(drops: &Rc<Cell<usize>>, n: usize) -> Vec<Tracked> {
    (0..n).map(|_| Tracked(drops.clone())).collect()
}

/// Panics on the first pull.
struct Explosive;

impl Iterator for Explosive {
    type Item = u32;
    fn next(&mut self) -> Option<u32> {
        panic!("pulled from a source that must not be touched")
    }
}

#[test]
fn takes_prefix_of_longer_source() {
    assert_eq!(try_from_iter(vec![1, 2, 3, 4, 5]).ok(), Some([1, 2, 3]));
}

#[test]
fn short_source_returns_what_it_had() {
    let rest = try_from_iter::<_, 5>(vec![1, 2, 3]).unwrap_err();
    assert_eq!(rest.len(), 3);
    assert_eq!(rest.collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn zero_from_empty() {
    let array: [u8; 0] = try_from_iter(Vec::<u8>::new()).unwrap();
    assert_eq!(array, []);
}

#[test]
fn empty_source_fails_with_nothing() {
    let mut rest = try_from_iter::<_, 4>(Vec::<u8>::new()).unwrap_err();
    assert_eq!(rest.len(), 0);
    assert_eq!(rest.next(), None);
}

#[test]
fn infinite_source() {
    assert_eq!(try_from_iter(iter::repeat(7)).ok(), Some([7, 7]));
}

#[test]
fn zero_never_pulls() {
    let array: [u32; 0] = try_from_iter(Explosive).unwrap();
    assert_eq!(array, []);
    let array: [u32; 0] = Explosive.next_array().unwrap();
    assert_eq!(array, []);
}

#[test]
fn pulls_exactly_n() {
    let pulls = Cell::new(0);
    let source = (0..).inspect(|_| pulls.set(pulls.get() + 1));
    assert_eq!(try_from_iter(source).ok(), Some([0, 1, 2]));
    assert_eq!(pulls.get(), 3);
}

#[test]
fn matches_prefix_or_whole_source() {
    fn check<const N: usize>() {
        for len in 0..8 {
            let source: Vec<usize> = (0..len).collect();
            match try_from_iter::<_, N>(source.clone()) {
                Ok(array) => {
                    assert!(len >= N, "len {} N {}", len, N);
                    assert_eq!(array[..], source[..N]);
                }
                Err(rest) => {
                    assert!(len < N, "len {} N {}", len, N);
                    assert_eq!(rest.collect::<Vec<_>>(), source);
                }
            }
        }
    }
    check::<0>();
    check::<1>();
    check::<3>();
    check::<7>();
    check::<8>();
}

#[test]
fn failure_replays_once() {
    let mut rest = try_from_iter::<_, 4>("ab".chars()).unwrap_err();
    assert_eq!(rest.next(), Some('a'));
    assert_eq!(rest.next(), Some('b'));
    assert_eq!(rest.next(), None);
    assert_eq!(rest.next(), None);
}

#[test]
fn failure_is_double_ended() {
    let mut rest: IntoIter<_, 5> = (1..=4).try_collect_array().unwrap_err();
    assert_eq!(rest.next_back(), Some(4));
    assert_eq!(rest.next(), Some(1));
    assert_eq!(rest.as_slice(), [2, 3]);
    assert_eq!(rest.len(), 2);
    assert_eq!(rest.rev().collect::<Vec<_>>(), [3, 2]);
}

#[test]
fn failure_clone_is_independent() {
    let mut rest = try_from_iter::<_, 3>(vec![String::from("x"), String::from("y")]).unwrap_err();
    rest.next();
    let copy = rest.clone();
    assert_eq!(rest.collect::<Vec<_>>(), ["y"]);
    assert_eq!(copy.collect::<Vec<_>>(), ["y"]);
}

#[test]
fn failure_debug() {
    let rest = try_from_iter::<_, 3>(vec![1, 2]).unwrap_err();
    assert_eq!(format!("{:?}", rest), "IntoIter([1, 2])");
}

#[test]
fn next_array_keeps_the_rest() {
    let mut source = 1..=7;
    assert_eq!(source.next_array().ok(), Some([1, 2, 3]));
    assert_eq!(source.next_array().ok(), Some([4, 5, 6]));
    let rest = source.next_array::<3>().unwrap_err();
    assert_eq!(rest.as_slice(), [7]);
    assert_eq!(source.next(), None);
}

#[test]
fn next_array_through_dyn() {
    let mut source = vec![1, 2, 3].into_iter();
    let dynamic: &mut dyn Iterator<Item = i32> = &mut source;
    assert_eq!(dynamic.next_array().ok(), Some([1, 2]));
    assert_eq!(source.next(), Some(3));
}

#[test]
fn drops_balance_on_success() {
    let drops = Rc::new(Cell::new(0));
    let array: [Tracked; 2] = try_from_iter(tracked(&drops, 5)).ok().unwrap();
    // the three unused items go down with the source
    assert_eq!(drops.get(), 3);
    drop(array);
    assert_eq!(drops.get(), 5);
}

#[test]
fn drops_balance_on_failure() {
    let drops = Rc::new(Cell::new(0));
    let mut rest = try_from_iter::<_, 4>(tracked(&drops, 3)).unwrap_err();
    assert_eq!(drops.get(), 0);
    drop(rest.next());
    assert_eq!(drops.get(), 1);
    drop(rest);
    assert_eq!(drops.get(), 3);
}

#[test]
fn drops_pulled_items_when_source_panics() {
    let drops = Rc::new(Cell::new(0));
    let items = tracked(&drops, 2);
    let source = items.into_iter().chain(iter::from_fn(|| -> Option<Tracked> {
        panic!("source failed")
    }));

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _ = try_from_iter::<_, 4>(source);
    }));
    assert!(result.is_err());
    assert_eq!(drops.get(), 2);
}
