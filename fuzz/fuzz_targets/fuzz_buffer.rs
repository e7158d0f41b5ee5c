#![no_main]

//! Differential fuzzing of `CharBuf` against a plain `Vec<char>` model.
//!
//! Every operation is applied to both; after each step the buffer's content
//! must match the model and the length/capacity invariants must hold.

use arbitrary::Arbitrary;
use charbuf::{CharBuf, concat, with_prefix, with_suffix};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Push(char),
    Append(Vec<char>),
    Reserve(u16),
    Clone,
    Take,
    ConcatSelf,
    Suffix(char),
    Prefix(char),
    Fill(Vec<char>),
    Read(u16),
    Rewrite(u16, char),
    Reset,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut buf = CharBuf::new();
    let mut model: Vec<char> = Vec::new();

    for op in ops {
        match op {
            Op::Push(c) => {
                buf.push(c).unwrap();
                model.push(c);
            }
            Op::Append(chars) => {
                let other = CharBuf::from_chars(chars.iter().copied()).unwrap();
                buf.append(&other).unwrap();
                model.extend(chars);
            }
            Op::Reserve(n) => {
                let before = buf.capacity();
                buf.reserve(usize::from(n)).unwrap();
                assert!(buf.capacity() >= before);
                assert!(buf.capacity() >= usize::from(n));
            }
            Op::Clone => {
                let copy = buf.clone();
                assert_eq!(copy, buf);
            }
            Op::Take => {
                let taken = buf.take();
                assert_eq!(buf.len(), 0);
                assert_eq!(buf.capacity(), 0);
                assert_eq!(taken.as_slice(), model.as_slice());
                buf = taken;
            }
            Op::ConcatSelf => {
                let doubled = concat(&buf, &buf).unwrap();
                assert_eq!(doubled.len(), 2 * buf.len());
            }
            Op::Suffix(c) => {
                let out = with_suffix(&buf, c).unwrap();
                assert_eq!(out.len(), buf.len() + 1);
                assert_eq!(out.get(buf.len()), Some(c));
            }
            Op::Prefix(c) => {
                let out = with_prefix(c, &buf).unwrap();
                assert_eq!(out.len(), buf.len() + 1);
                assert_eq!(out.get(0), Some(c));
            }
            Op::Fill(chars) => {
                buf.fill_from(chars.iter().copied()).unwrap();
                model = chars;
            }
            Op::Read(i) => {
                let i = usize::from(i);
                assert_eq!(buf.get(i), model.get(i).copied());
            }
            Op::Rewrite(i, c) => {
                let i = usize::from(i);
                if i < model.len() {
                    *buf.at_mut(i) = c;
                    model[i] = c;
                }
            }
            Op::Reset => {
                buf.reset();
                model.clear();
                assert_eq!(buf.capacity(), 0);
            }
        }

        assert_eq!(buf.as_slice(), model.as_slice());
        assert!(buf.capacity() >= buf.len());
        if buf.capacity() == 0 {
            assert!(buf.is_empty());
        }
    }
});
