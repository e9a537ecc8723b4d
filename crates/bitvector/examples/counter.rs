use bitvector::BitVector;

// Counts through every value of an n-bit register by repeated increment, printing each state.
fn main() -> Result<(), bitvector::Error> {
    env_logger::init();

    let width = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(4);

    let mut register = BitVector::init(width)?;
    register.zeron(width);

    let mut steps = 0u64;
    loop {
        let bits = register
            .iter()
            .rev()
            .map(|bit| if bit { '1' } else { '0' })
            .collect::<String>();
        println!("{steps:>6} {bits}");
        steps += 1;
        if register.increment() {
            break;
        }
    }
    register.print();
    eprintln!("wrapped after {steps} steps");
    Ok(())
}
