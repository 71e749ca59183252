use std::io::{self, Write};

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    showcase::driver::run(&mut out)?;
    out.flush()
}
