use std::io::{self, Write};

use crate::container::Container;
use crate::shapes::{Circle, Shape};

/// The linear demo routine. Writes to `out` so tests can capture the exact
/// output; `main` hands it a locked stdout.
///
/// Note that `draw` is defined on every shape but never invoked here, and the
/// summing closure's result is computed but never printed. Both quirks are
/// kept from the C++ demo this reproduces.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    let mut container: Container<i32> = Container::new();

    for num in [1, 2, 3, 4, 5] {
        container.add(num * 2);
    }

    let sum = |values: &Container<i32>| {
        let mut total = 0;
        for val in values {
            total += val;
        }
        total
    };
    let _total = sum(&container);

    let circle: Box<dyn Shape> = Box::new(Circle::new(5.0));
    writeln!(out, "Area: {}", circle.area())?;

    let message = "Hello, C++20!";
    writeln!(out, "{message}")?;

    Ok(())
}
