//! Keel walkthrough: the primitives used together by ordinary callers.
//!
//! Demonstrates:
//!   1. Binding an arena to a stack buffer and carving typed regions
//!   2. Filling and summing a bounds-checked view
//!   3. Linear search reporting absence with `Optional`
//!   4. Number parsing reporting failure with `Outcome`
//!   5. Trimming a byte string through read-only views
//!   6. Tagged-variant dispatch over a mixed list of shapes
//!   7. Reset, and what happens to regions from before it
//!
//! Run with:
//!   cargo run --example walkthrough

use keel::prelude::*;

// ─── Error codes for the parser ─────────────────────────────────

const EMPTY_INPUT: ErrorCode = ErrorCode(1);
const BAD_DIGIT: ErrorCode = ErrorCode(2);
const OVERFLOW: ErrorCode = ErrorCode(3);

// ─── Consumers of the core ──────────────────────────────────────

fn sum(view: BoundedView<'_, i32>) -> i64 {
    let mut total = 0i64;
    for i in 0..view.len() {
        total += i64::from(view.get(i));
    }
    total
}

fn find(view: BoundedView<'_, i32>, target: i32) -> Optional<usize> {
    for i in 0..view.len() {
        if view.get(i) == target {
            return Optional::of(i);
        }
    }
    Optional::empty()
}

fn parse_number(text: BoundedView<'_, u8>) -> Outcome<i32> {
    if text.is_empty() {
        return Outcome::err(EMPTY_INPUT, "empty input");
    }
    let (negative, digits) = match text.get(0) {
        b'-' => (true, text.subview(1, text.len() - 1)),
        _ => (false, text),
    };
    if digits.is_empty() {
        return Outcome::err(EMPTY_INPUT, "sign without digits");
    }
    let mut value: i32 = 0;
    for (pos, &byte) in digits.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Outcome::err(BAD_DIGIT, format!("unexpected byte {byte:#04x} at {pos}"));
        }
        let digit = i32::from(byte - b'0');
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) });
        match next {
            Some(v) => value = v,
            None => return Outcome::err(OVERFLOW, "value does not fit in i32"),
        }
    }
    Outcome::ok(value)
}

fn trim_whitespace(text: BoundedView<'_, u8>) -> BoundedView<'_, u8> {
    let start = text
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(text.len());
    let end = text
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    text.subview(start, end - start)
}

fn main() {
    // ── 1. Arena over caller memory ─────────────────────────────
    let mut backing = [0u64; 128];
    let mut arena = Arena::new(bytemuck::cast_slice_mut::<u64, u8>(&mut backing));
    println!("arena {} ready: {} bytes", arena.id(), arena.capacity());

    let nums = arena
        .alloc_slice::<i32>(10)
        .expect("10 i32 fit in 1 KiB");
    println!("carved {nums}");

    match arena.alloc(2000).into_option() {
        Some(region) => println!("unexpected: got {region}"),
        None => println!("alloc(2000) refused, used stays at {}", arena.used()),
    }

    // ── 2. Fill and sum ─────────────────────────────────────────
    {
        let mut view = arena.view_mut::<i32>(nums).expect("region is live");
        for i in 0..view.len() {
            view.set(i, (i as i32 + 1) * 10);
        }
        println!("sum = {}", sum(view.as_view()));

        // ── 3. Search ───────────────────────────────────────────
        for target in [70, 75] {
            match find(view.as_view(), target).into_option() {
                Some(i) => println!("found {target} at index {i}"),
                None => println!("{target} not present"),
            }
        }
    }

    // ── 4. Parsing ──────────────────────────────────────────────
    for input in ["123", "-2147483648", "12a", "", "99999999999"] {
        let parsed = parse_number(BoundedView::new(input.as_bytes()));
        match parsed {
            Outcome::Ok(v) => println!("parse {input:?} -> {v}"),
            Outcome::Err(ref failure) => println!("parse {input:?} -> {failure}"),
        }
    }

    // ── 5. Trimming ─────────────────────────────────────────────
    let raw = b"   keel \t\n";
    let trimmed = trim_whitespace(BoundedView::new(raw));
    println!(
        "trimmed {:?} -> {:?}",
        String::from_utf8_lossy(raw),
        String::from_utf8_lossy(trimmed.as_slice())
    );

    // ── 6. Shapes ───────────────────────────────────────────────
    let shapes = [Shape::circle(2.0), Shape::square(3.0)];
    for shape in &shapes {
        println!(
            "{:>6}: area {:>7.3}, perimeter {:>7.3}",
            shape.kind(),
            area(shape),
            perimeter(shape)
        );
    }

    // ── 7. Reset ────────────────────────────────────────────────
    arena.reset();
    match arena.view::<i32>(nums) {
        Ok(_) => println!("unexpected: old region still resolves"),
        Err(e) => println!("after reset: {e}"),
    }
    let stats = arena.stats();
    println!(
        "stats: {} allocations, {} failed, {} resets, high water {} bytes",
        stats.allocations, stats.failed_allocations, stats.resets, stats.high_water
    );
}
