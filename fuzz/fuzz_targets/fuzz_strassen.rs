#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{multiply_conventional, multiply_strassen_threshold, Matrix, Quadrant};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Byte 0 picks the dimension (1..=24), byte 1 the threshold, byte 2 an
    // optional quarter; the rest fills both matrices.
    let dim = usize::from(data[0] % 24) + 1;
    let threshold = usize::from(data[1]) % dim + 1;
    let cells = &data[3..];
    let value = |i: usize| cells.get(i % cells.len().max(1)).map_or(0, |&b| i64::from(b as i8));

    let x = Matrix::from_fn(dim, |r, c| value(r * dim + c));
    let y = Matrix::from_fn(dim, |r, c| value(dim * dim + r * dim + c));

    let expected = multiply_conventional(&x.view(), &y.view()).unwrap();
    let got = multiply_strassen_threshold(&x.view(), &y.view(), threshold).unwrap();
    assert_eq!(got, expected, "dim={dim} threshold={threshold}");

    if dim >= 2 {
        let qx = x.view().quarter(Quadrant::try_from(usize::from(data[2] % 4)).unwrap());
        let qy = y.view().quarter(Quadrant::try_from(usize::from(data[2] / 4 % 4)).unwrap());
        let expected = multiply_conventional(&qx, &qy).unwrap();
        let got = multiply_strassen_threshold(&qx, &qy, threshold).unwrap();
        assert_eq!(got, expected, "quarters of dim={dim} threshold={threshold}");
    }
});
