use bitvector::BitVector;
use rand::{Rng, SeedableRng, rngs::StdRng};

const LEN: usize = 1000;
const ROUNDS: usize = 100;

fn round(rng: &mut StdRng) {
    let mut a = BitVector::init(10).unwrap();
    let mut b = BitVector::create(11).unwrap();
    let mut a_ref = Vec::with_capacity(LEN);
    let mut b_ref = Vec::with_capacity(LEN);

    for k in 0..LEN {
        let (x, y) = (rng.r#gen::<bool>(), rng.r#gen::<bool>());
        a.push(x).unwrap();
        b.push(y).unwrap();
        a_ref.push(x);
        b_ref.push(y);
        assert_eq!(a.len(), k + 1);
        assert_eq!(b.len(), k + 1);
        assert_eq!(a.get(k), Ok(x));
        assert_eq!(b.get(k), Ok(y));
    }

    for _ in 0..LEN {
        let p = rng.gen_range(0..a.len());
        let q = rng.gen_range(0..b.len());
        let (x, y) = (rng.r#gen::<bool>(), rng.r#gen::<bool>());
        assert_eq!(a.get(p), Ok(a_ref[p]));
        assert_eq!(b.get(q), Ok(b_ref[q]));

        a.set(p, x).unwrap();
        b.set(q, y).unwrap();
        a_ref[p] = x;
        b_ref[q] = y;

        assert_eq!(a.get(p), Ok(x));
        assert_eq!(b.get(q), Ok(y));
    }

    assert!(a.iter().eq(a_ref.iter().copied()));
    assert!(b.iter().eq(b_ref.iter().copied()));

    for k in (0..LEN).rev() {
        assert_eq!(a.pop(), Some(a_ref[k]));
        assert_eq!(b.pop(), Some(b_ref[k]));
        assert_eq!(a.len(), k);
    }
    assert!(a.is_empty() && b.is_empty());

    a.release();
    drop(b);
}

#[test]
fn push_set_pop_against_reference() {
    let mut rng = StdRng::seed_from_u64(101);
    for _ in 0..ROUNDS {
        round(&mut rng);
    }
}

#[test]
fn any_seed() {
    for seed in [0, 1, 0xdead_beef] {
        round(&mut StdRng::seed_from_u64(seed));
    }
}

#[test]
fn copy_is_independent() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut source = BitVector::init(0).unwrap();
    source
        .try_extend((0..517).map(|_| rng.r#gen::<bool>()))
        .unwrap();

    let mut copy = source.copy(None).unwrap();
    assert!(source.equals(&copy));

    let before = source.iter().collect::<Vec<_>>();
    for index in 0..copy.len() {
        let bit = copy.get(index).unwrap();
        copy.set(index, !bit).unwrap();
    }
    assert!(source.iter().eq(before.iter().copied()));
    assert!(copy.iter().zip(source.iter()).all(|(a, b)| a != b));
}
