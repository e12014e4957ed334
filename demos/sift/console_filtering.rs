//! Console filtering examples.
//!
//! This example prints the result of two filter passes:
//! - numbers below 15 from `[1, 10, 15, 18, 20, 34]`
//! - values strictly equal to `true` from `[1, undefined, null, 0, true]`
//!
//! Set `RUST_LOG=sift=trace` to watch every predicate verdict.

use sift::prelude::*;

fn main() -> Result<(), FilterError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    example_1_numbers_below_threshold();
    example_2_strictly_true()?;
    example_3_configured_pass()?;

    Ok(())
}

/// Example 1: typed filtering with a comparison predicate
fn example_1_numbers_below_threshold() {
    let numbers = [1, 10, 15, 18, 20, 34];
    let filtered_numbers = numbers.filtered(|f, _, _| *f < 15);

    println!("{filtered_numbers:?}");
    // [1, 10]
}

/// Example 2: dynamic values, including absence markers
fn example_2_strictly_true() -> Result<(), FilterError> {
    let values = Value::array([
        Value::from(1),
        Value::Undefined,
        Value::Null,
        Value::from(0),
        Value::from(true),
    ]);
    let is_true = Value::function(|_, f, _, _| Ok(Value::from(f.strict_equals(&Value::Bool(true)))));

    println!("{}", values.filter(&is_true, None)?);
    // [ true ]

    Ok(())
}

/// Example 3: builder with context and recorded indices
fn example_3_configured_pass() -> Result<(), FilterError> {
    let threshold = 15;
    let numbers = [1, 10, 15, 18, 20, 34];

    let mut below = Filter::with_context(&threshold)
        .predicate_with(|limit, f: &i32, _, _| limit.is_some_and(|limit| f < limit))
        .return_indices()
        .build()?;

    print!("{}", below.apply(&numbers)?);

    Ok(())
}
