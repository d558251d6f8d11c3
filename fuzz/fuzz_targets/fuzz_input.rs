#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_cli::parse_matrices;

fuzz_target!(|data: &[u8]| {
    let Some((&dim, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let dim = usize::from(dim % 16);
    if let Ok((x, y)) = parse_matrices(text, dim) {
        assert_eq!(x.dim(), dim);
        assert_eq!(y.dim(), dim);
    }
});
