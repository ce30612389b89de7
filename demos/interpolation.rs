extern crate real_polynomial;

use real_polynomial::Polynomial;

fn main() {

    let points = vec![
        (0.0, 1.0),
        (1.0, -1.0),
        (2.0, 0.0),
        (4.0, 3.0),
        (5.0, 1.0)
    ];

    let polynomial = Polynomial::through_points(&points).unwrap();
    println!("polynomial through points: {}", polynomial);

    let x_min = 0.0;
    let x_max = 5.0;
    let number_of_steps = 50;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, polynomial.evaluate(x));
    }
}
