//! Walkthrough of the sequence operations.
//!
//! Run with: RUST_LOG=trace cargo run -p structural-sequence --example fold_demo

use structural_sequence::{EmptyStructureError, Sequence};

fn main() -> Result<(), EmptyStructureError> {
    pretty_env_logger::init();

    println!("=== Structural Sequences ===\n");

    let numbers: Sequence<i64> = Sequence::construct([1, 2, 3, 4, 5]);
    println!("numbers            = {numbers}");
    println!("sum                = {}", numbers.sum());
    println!("length             = {}", numbers.length());
    println!("tail               = {}", numbers.tail()?);
    println!("set_head(9)        = {}", numbers.set_head(9));
    println!("drop(2)            = {}", numbers.drop(2));
    println!("drop_while(< 3)    = {}", numbers.drop_while(|x| *x < 3));
    println!("init               = {}", numbers.init());
    println!("reverse            = {}", numbers.reverse());

    println!("\n--- Folds ---");
    let nested = numbers.fold_right(String::from("nil"), |x, acc| format!("({x} . {acc})"));
    println!("fold_right         = {nested}");
    let digits = numbers.fold_left(0i64, |acc, x| acc * 10 + x);
    println!("fold_left          = {digits}");

    println!("\n--- Transformations ---");
    println!("map(x * x)         = {}", numbers.map(|x| x * x));
    println!("filter(even)       = {}", numbers.filter(|x| x % 2 == 0));
    println!("flat_map(x, -x)    = {}", numbers.flat_map(|x| Sequence::construct([*x, -x])));
    println!("append([6, 7])     = {}", numbers.append(&Sequence::construct([6, 7])));

    let short: Sequence<i64> = Sequence::construct([1, 2]);
    let long: Sequence<i64> = Sequence::construct([1, 2, 3]);
    println!("[1, 2] + [1, 2, 3] = {}", &short + &long);

    let sub = Sequence::construct([2, 3]);
    println!("has_subsequence    = {}", numbers.has_subsequence(&sub));

    println!("\n--- Products ---");
    let factors: Sequence<f64> = Sequence::construct([1.0, 2.0, 0.0, 4.0]);
    println!("product({factors}) = {}", factors.product());

    println!("\n--- Errors ---");
    match Sequence::<i64>::empty().tail() {
        Ok(rest) => println!("unexpected tail: {rest}"),
        Err(err) => println!("tail(Empty)        -> {err}"),
    }

    Ok(())
}
