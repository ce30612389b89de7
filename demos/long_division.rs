extern crate real_polynomial;

use real_polynomial::Polynomial;

fn main() {

    let dividend = Polynomial::new(vec![1.0, -2.0, -1.0, 4.0]);
    let divisor = Polynomial::new(vec![1.0, 3.0, 2.0]);

    let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();

    println!("({}) / ({}) = {}", dividend, divisor, quotient);
    println!("({}) % ({}) = {}", dividend, divisor, remainder);

    let reconstructed = &(&divisor * &quotient) + &remainder;
    println!("({}) * ({}) + {} = {}", divisor, quotient, remainder, reconstructed);
}
