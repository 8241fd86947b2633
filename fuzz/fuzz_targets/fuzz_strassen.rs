#![no_main]

use libfuzzer_sys::fuzz_target;

use matbench_core::{strassen, strassen_flat, Matrix};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the side (1..=8), the rest fills both operands.
    let n = usize::from(data[0] % 8) + 1;
    let need = 2 * n * n;
    if data.len() < need + 1 {
        return;
    }
    let cells: Vec<i64> = data[1..=need].iter().map(|&b| i64::from(b) - 128).collect();

    let mut a = Matrix::new(n, n);
    let mut b = Matrix::new(n, n);
    for i in 0..n {
        for j in 0..n {
            a[(i, j)] = cells[i * n + j];
            b[(i, j)] = cells[n * n + i * n + j];
        }
    }

    let oracle = a.multiply(&b).expect("square operands");
    let pure = strassen(&a, &b, None).expect("square operands");
    let cut = strassen(&a, &b, Some(2)).expect("square operands");
    assert_eq!(oracle, pure);
    assert_eq!(oracle, cut);

    let flat = strassen_flat(a.to_rows(), b.to_rows(), None).expect("square operands");
    assert_eq!(Matrix::from_rows(&flat).expect("rectangular"), oracle);
});
